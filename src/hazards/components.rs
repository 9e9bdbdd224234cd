//! Hazards domain: the hazard record and the trigger contract shared by all
//! variants.

use bevy::math::Rect;
use bevy::prelude::*;

use crate::core::GameTuning;
use crate::hazards::{FallingPlatform, Fire, Saw, Trampoline};
use crate::movement::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HazardId(pub u32);

/// One environmental hazard. Created at level build and kept for the life
/// of the level; each instance owns its timers.
#[derive(Component, Debug, Clone)]
pub struct Hazard {
    pub id: HazardId,
    /// Current footprint. Saws and falling platforms move it in `update`.
    pub bounds: Rect,
    pub kind: HazardKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HazardKind {
    Spike,
    Fire(Fire),
    Saw(Saw),
    Trampoline(Trampoline),
    FallingPlatform(FallingPlatform),
}

/// What a successful trigger did to the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardEffect {
    /// `amount` is the health actually removed; 0 while invincible.
    Damage { amount: i32 },
    Bounce,
    Triggered,
}

impl Hazard {
    pub fn new(id: HazardId, bounds: Rect, kind: HazardKind) -> Self {
        Self { id, bounds, kind }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            HazardKind::Spike => "spike",
            HazardKind::Fire(_) => "fire",
            HazardKind::Saw(_) => "saw",
            HazardKind::Trampoline(_) => "trampoline",
            HazardKind::FallingPlatform(_) => "falling_platform",
        }
    }

    pub fn update(&mut self, dt_ms: f32) {
        match &mut self.kind {
            HazardKind::Spike => {}
            HazardKind::Fire(fire) => fire.update(dt_ms),
            HazardKind::Saw(saw) => {
                saw.update(dt_ms);
                self.bounds = saw.bounds();
            }
            HazardKind::Trampoline(trampoline) => trampoline.update(dt_ms),
            HazardKind::FallingPlatform(platform) => {
                platform.update(dt_ms);
                self.bounds = platform.bounds();
            }
        }
    }

    pub fn is_dangerous(&self) -> bool {
        match &self.kind {
            HazardKind::Spike | HazardKind::Saw(_) => true,
            HazardKind::Fire(fire) => fire.is_dangerous(),
            HazardKind::Trampoline(_) | HazardKind::FallingPlatform(_) => false,
        }
    }

    /// Only falling platforms ever block movement.
    pub fn is_solid(&self) -> bool {
        match &self.kind {
            HazardKind::FallingPlatform(platform) => platform.is_solid(),
            _ => false,
        }
    }

    /// Called once per tick while the actor overlaps this hazard. `None`
    /// means the hazard is in a state where it cannot act.
    pub fn trigger(&mut self, actor: &mut Actor, tuning: &GameTuning) -> Option<HazardEffect> {
        match &mut self.kind {
            HazardKind::Spike => Some(HazardEffect::Damage {
                amount: apply_hazard_damage(actor, tuning.spike_damage, tuning),
            }),
            HazardKind::Fire(fire) => fire.is_dangerous().then(|| HazardEffect::Damage {
                amount: apply_hazard_damage(actor, tuning.fire_damage, tuning),
            }),
            HazardKind::Saw(_) => Some(HazardEffect::Damage {
                amount: apply_hazard_damage(actor, tuning.saw_damage, tuning),
            }),
            HazardKind::Trampoline(trampoline) => {
                trampoline.bounce(actor, tuning);
                Some(HazardEffect::Bounce)
            }
            HazardKind::FallingPlatform(platform) => {
                platform.trigger().then_some(HazardEffect::Triggered)
            }
        }
    }
}

/// Damage gated by the actor's invincibility window; a hit opens a new
/// window. Returns the health removed.
pub fn apply_hazard_damage(actor: &mut Actor, amount: i32, tuning: &GameTuning) -> i32 {
    if actor.is_invincible() {
        return 0;
    }
    let applied = actor.health.take_damage(amount);
    actor.invincibility.start(tuning.invincibility_ms);
    applied
}
