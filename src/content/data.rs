//! Data definitions for level RON files.
//!
//! These structs mirror assets/levels/*.ron. Positions are top-left corners
//! in y-down screen space, except `spawn`, which is the actor's centre.

use serde::{Deserialize, Serialize};

use crate::hazards::{SawAxis, SawMotion};
use crate::level::SurfaceKind;

/// Level schema this build understands.
pub const LEVEL_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    /// Seeds hazard phase offsets so a level builds the same way every time.
    #[serde(default)]
    pub seed: u64,
    pub spawn: (f32, f32),
    /// Actors whose centre falls below this line respawn.
    pub kill_plane_y: f32,
    pub geometry: Vec<RectDef>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: SurfaceKind,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hazard: HazardConfig,
}

/// Per-hazard overrides. Unset values come from `GameTuning`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum HazardConfig {
    Spike,
    Fire {
        #[serde(default)]
        cycle_period_ms: Option<f32>,
    },
    Saw {
        axis: SawAxis,
        #[serde(default)]
        motion: SawMotion,
        #[serde(default)]
        amplitude: Option<f32>,
        #[serde(default)]
        period_ms: Option<f32>,
    },
    Trampoline,
    FallingPlatform {
        #[serde(default)]
        fall_delay_ms: Option<f32>,
        #[serde(default)]
        respawn_delay_ms: Option<f32>,
    },
}

impl LevelDef {
    /// Built-in room used when no level file can be loaded.
    pub fn training_ground() -> Self {
        let surface = |x, y, width, height, kind| RectDef {
            x,
            y,
            width,
            height,
            kind,
        };
        let hazard = |x, y, width, height, hazard| HazardDef {
            x,
            y,
            width,
            height,
            hazard,
        };

        Self {
            schema_version: LEVEL_SCHEMA_VERSION,
            name: "training_ground".to_string(),
            seed: 7,
            spawn: (-480.0, 376.0),
            kill_plane_y: 900.0,
            geometry: vec![
                surface(-600.0, 400.0, 1200.0, 40.0, SurfaceKind::Ground),
                surface(-640.0, -200.0, 40.0, 640.0, SurfaceKind::Wall),
                surface(600.0, -200.0, 40.0, 640.0, SurfaceKind::Wall),
                surface(-320.0, 260.0, 160.0, 20.0, SurfaceKind::Platform),
                surface(120.0, 180.0, 160.0, 20.0, SurfaceKind::Platform),
                surface(-60.0, 120.0, 30.0, 280.0, SurfaceKind::Wall),
                surface(400.0, 360.0, 40.0, 40.0, SurfaceKind::Box),
            ],
            hazards: vec![
                hazard(-200.0, 384.0, 64.0, 16.0, HazardConfig::Spike),
                hazard(
                    40.0,
                    352.0,
                    32.0,
                    48.0,
                    HazardConfig::Fire {
                        cycle_period_ms: None,
                    },
                ),
                hazard(
                    180.0,
                    120.0,
                    40.0,
                    40.0,
                    HazardConfig::Saw {
                        axis: SawAxis::Horizontal,
                        motion: SawMotion::Sine,
                        amplitude: Some(80.0),
                        period_ms: None,
                    },
                ),
                hazard(300.0, 388.0, 64.0, 12.0, HazardConfig::Trampoline),
                hazard(
                    -520.0,
                    250.0,
                    120.0,
                    16.0,
                    HazardConfig::FallingPlatform {
                        fall_delay_ms: None,
                        respawn_delay_ms: None,
                    },
                ),
            ],
        }
    }
}
