//! Content domain: RON-backed tuning and level definitions.

mod data;
mod loader;
mod validation;


pub use data::{HazardConfig, HazardDef, LEVEL_SCHEMA_VERSION, LevelDef, RectDef};
pub use loader::{ContentLoadError, load_level, load_tuning, parse_level, parse_ron};
pub use validation::{ValidationError, validate_level};

use bevy::prelude::*;

use crate::core::{GameTuning, SessionConfig};

/// Level definition waiting to be built into the world.
#[derive(Resource, Debug, Default)]
pub struct PendingLevel(pub Option<LevelDef>);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingLevel>();
    }
}

/// Reads tuning and the selected level from disk. Failures fall back to
/// defaults so the game stays playable with a broken content folder.
pub(crate) fn load_content(
    session: Res<SessionConfig>,
    mut tuning: ResMut<GameTuning>,
    mut pending: ResMut<PendingLevel>,
) {
    match load_tuning(&session.content_root) {
        Ok(loaded) => {
            *tuning = loaded;
            info!("Loaded tuning from {}", session.content_root.display());
        }
        Err(e) => warn!("{}; using default tuning", e),
    }

    for warning in tuning.balance_warnings() {
        warn!("Tuning: {}", warning);
    }

    pending.0 = match load_level(&session.content_root, &session.level) {
        Ok(level) => Some(level),
        Err(e) => {
            warn!("{}; using built-in training ground", e);
            Some(LevelDef::training_ground())
        }
    };
}
