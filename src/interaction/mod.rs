//! Interaction domain: the fixed-order per-frame loop tying input,
//! movement, collisions, jumps and hazards together.

mod events;
mod systems;
mod tick;


pub use events::{CollisionEvent, CollisionKind};
pub use tick::{TickContext, TickReport, run_tick};

use bevy::prelude::*;

use crate::core::advance_frame_delta;
use crate::interaction::systems::simulate_local_actor;
use crate::movement::systems::sample_input;
use crate::net::{apply_inbound_messages, flush_outbox};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CollisionEvent>().add_systems(
            Update,
            (
                advance_frame_delta,
                apply_inbound_messages,
                sample_input,
                simulate_local_actor,
                flush_outbox,
            )
                .chain(),
        );
    }
}
