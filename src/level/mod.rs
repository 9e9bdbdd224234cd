//! Level domain: static geometry and level construction.

mod build;
mod geometry;

#[cfg(test)]
mod tests;

pub use build::{ActiveLevel, BuiltLevel, build_level};
pub use geometry::{StaticGeometry, Surface, SurfaceKind, rect_from_top_left};

use bevy::prelude::*;

use crate::content::load_content;
use crate::level::build::spawn_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StaticGeometry>()
            .add_systems(Startup, (load_content, spawn_level).chain());
    }
}
