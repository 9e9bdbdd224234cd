//! Hazards domain: trampolines.

use crate::core::GameTuning;
use crate::movement::{Actor, JumpPhase};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trampoline {
    /// Cosmetic only; bounces are never blocked by it.
    pub cooldown_remaining_ms: f32,
}

impl Trampoline {
    pub fn update(&mut self, dt_ms: f32) {
        if self.cooldown_remaining_ms > 0.0 {
            self.cooldown_remaining_ms = (self.cooldown_remaining_ms - dt_ms).max(0.0);
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.cooldown_remaining_ms > 0.0
    }

    /// Launches the actor upward and hands back a full jump sequence.
    pub fn bounce(&mut self, actor: &mut Actor, tuning: &GameTuning) {
        actor.velocity.y = -tuning.trampoline_boost;
        actor.jump_count = 0;
        actor.is_grounded = false;
        actor.leave_wall();
        actor.phase = JumpPhase::Airborne;
        self.cooldown_remaining_ms = tuning.trampoline_cooldown_ms;
    }
}
