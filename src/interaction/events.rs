//! Interaction domain: per-tick collision events.

use bevy::ecs::message::Message;

use crate::hazards::{HazardEffect, HazardId};

/// One hazard acting on one actor during a tick. Consumed by presentation
/// in the same frame; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    pub actor_id: String,
    pub hazard_id: HazardId,
    pub kind: CollisionKind,
}

impl Message for CollisionEvent {}

impl CollisionEvent {
    /// True only when health was actually removed; hits absorbed by
    /// invincibility report `Damage { amount: 0 }`.
    pub fn dealt_damage(&self) -> bool {
        matches!(self.kind, CollisionKind::Damage { amount } if amount > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Damage { amount: i32 },
    Bounce,
    Trigger,
}

impl From<HazardEffect> for CollisionKind {
    fn from(effect: HazardEffect) -> Self {
        match effect {
            HazardEffect::Damage { amount } => CollisionKind::Damage { amount },
            HazardEffect::Bounce => CollisionKind::Bounce,
            HazardEffect::Triggered => CollisionKind::Trigger,
        }
    }
}
