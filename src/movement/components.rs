//! Movement domain: the actor record and its nested state types.

use bevy::math::Rect;
use bevy::prelude::*;

use crate::core::GameTuning;

/// Marks the actor driven by this client's input.
#[derive(Component, Debug, Clone)]
pub struct LocalActor {
    pub player_id: String,
}

/// Controllable physics entity. Plain data; the movement, collision, jump
/// and hazard functions are the only writers.
///
/// Simulation space is y-down: negative `velocity.y` moves up.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    /// Centre of the bounding box.
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub phase: JumpPhase,
    pub is_grounded: bool,
    /// 0 while grounded; never exceeds `max_jumps`.
    pub jump_count: u8,
    pub max_jumps: u8,
    pub is_wall_sliding: bool,
    pub wall_side: WallSide,
    pub can_wall_jump: bool,
    pub wall_jump_cooldown_ms: f32,
    pub forced_horizontal_ms: f32,
    pub forced_horizontal_direction: f32,
    pub health: Health,
    pub invincibility: Invincibility,
}

impl Actor {
    pub fn spawn(position: Vec2, tuning: &GameTuning) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: tuning.actor_size(),
            facing: Facing::default(),
            phase: JumpPhase::Grounded,
            is_grounded: true,
            jump_count: 0,
            max_jumps: tuning.max_jumps,
            is_wall_sliding: false,
            wall_side: WallSide::None,
            can_wall_jump: false,
            wall_jump_cooldown_ms: 0.0,
            forced_horizontal_ms: 0.0,
            forced_horizontal_direction: 0.0,
            health: Health::new(tuning.max_health),
            invincibility: Invincibility::default(),
        }
    }

    /// Puts the actor back at `position` with full health and a fresh
    /// invincibility window.
    pub fn respawn(&mut self, position: Vec2, tuning: &GameTuning) {
        *self = Self::spawn(position, tuning);
        self.invincibility.start(tuning.invincibility_ms);
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_active()
    }

    /// Landing edge: the only place `jump_count` returns to zero through
    /// ground contact.
    pub fn land(&mut self) {
        self.jump_count = 0;
        self.forced_horizontal_ms = 0.0;
        self.phase = JumpPhase::Grounded;
        self.leave_wall();
    }

    pub fn leave_wall(&mut self) {
        self.is_wall_sliding = false;
        self.wall_side = WallSide::None;
        self.can_wall_jump = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn from_direction(direction: f32) -> Option<Self> {
        if direction < 0.0 {
            Some(Facing::Left)
        } else if direction > 0.0 {
            Some(Facing::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    None,
    Left,
    Right,
}

impl WallSide {
    /// Horizontal direction pointing away from the wall.
    pub fn away(&self) -> Option<f32> {
        match self {
            WallSide::None => None,
            WallSide::Left => Some(1.0),
            WallSide::Right => Some(-1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Airborne,
    WallSliding,
    WallJumping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Returns the damage actually removed.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current.max(0));
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Post-hit window during which hazard damage is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invincibility {
    pub remaining_ms: f32,
}

impl Invincibility {
    pub fn start(&mut self, duration_ms: f32) {
        self.remaining_ms = duration_ms.max(0.0);
    }

    pub fn tick(&mut self, dt_ms: f32) {
        if self.remaining_ms > 0.0 {
            self.remaining_ms = (self.remaining_ms - dt_ms).max(0.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0.0
    }
}
