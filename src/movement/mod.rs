//! Movement domain: the actor record, input, and the locomotion steps the
//! interaction loop runs each tick.

mod components;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{Actor, Facing, Health, Invincibility, JumpPhase, LocalActor, WallSide};
pub use resources::{ActorInput, JumpLatch};
pub use systems::{
    CONTACT_PROBE, Contacts, JumpKind, apply_movement, overlaps, probe_contacts,
    resolve_collisions, tick_actor_timers, update_jump_state,
};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActorInput>().init_resource::<JumpLatch>();
    }
}
