//! Presentation domain: plain coloured sprites that mirror simulation
//! state after each tick. Nothing here writes back into the simulation.

mod systems;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::presentation::systems::{
    attach_actor_sprites, attach_hazard_sprites, attach_remote_sprites, flash_on_damage,
    sync_actor_sprites, sync_geometry_sprites, sync_hazard_sprites, sync_remote_sprites,
};

/// Marks a sprite drawn for a `StaticGeometry` surface.
#[derive(Component, Debug)]
pub struct SurfaceSprite;

/// Remaining time of the red tint after the local actor is hit.
#[derive(Component, Debug, Default)]
pub struct DamageFlash {
    pub remaining_secs: f32,
}

/// Simulation space is y-down; the camera is y-up.
pub fn world_position(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                sync_geometry_sprites,
                attach_hazard_sprites,
                attach_actor_sprites,
                attach_remote_sprites,
                flash_on_damage,
                sync_hazard_sprites,
                sync_actor_sprites,
                sync_remote_sprites,
            )
                .chain()
                .before(TransformSystems::Propagate),
        );
    }
}
