//! Core domain: tuning, session configuration and the frame clock.

mod clock;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use clock::FrameDelta;
pub use resources::{GameTuning, SessionConfig};

pub(crate) use clock::advance_frame_delta;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTuning>()
            .init_resource::<SessionConfig>()
            .init_resource::<FrameDelta>()
            .add_systems(Startup, setup_camera);
    }
}
