//! Developer overlay for tuning movement and hazards.
//!
//! - F1: actor state readout (position, velocity, jump phase, health)
//! - F2: outlines of solids, hazard bounds and the actor box

mod systems;

use bevy::prelude::*;

use crate::debug::systems::{draw_collision_outlines, toggle_debug_views, update_debug_info_overlay};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
    pub show_outlines: bool,
}

/// Marker for the actor readout text.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_views,
                update_debug_info_overlay,
                draw_collision_outlines.run_if(|state: Res<DebugState>| state.show_outlines),
            ),
        );
    }
}
