//! Structural checks for level definitions.

use super::data::{HazardConfig, LEVEL_SCHEMA_VERSION, LevelDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub index: usize,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}].{}: {}",
            self.section, self.index, self.field, self.message
        )
    }
}

/// Helper macro for rejecting empty or inverted rectangles
macro_rules! check_size {
    ($errors:expr, $section:expr, $index:expr, $def:expr) => {
        if !($def.width > 0.0 && $def.height > 0.0) {
            $errors.push(ValidationError {
                section: $section,
                index: $index,
                field: "width/height",
                message: format!("size must be positive, got {}x{}", $def.width, $def.height),
            });
        }
    };
}

/// Overridden timings must be finite and positive; unset values come from
/// tuning and are not checked here.
fn check_duration(
    errors: &mut Vec<ValidationError>,
    index: usize,
    field: &'static str,
    value: Option<f32>,
) {
    let Some(ms) = value else {
        return;
    };
    if !(ms.is_finite() && ms > 0.0) {
        errors.push(ValidationError {
            section: "hazards",
            index,
            field,
            message: format!("must be a finite positive duration, got {}", ms),
        });
    }
}

/// Validate a level definition.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.schema_version != LEVEL_SCHEMA_VERSION {
        errors.push(ValidationError {
            section: "level",
            index: 0,
            field: "schema_version",
            message: format!(
                "expected {}, got {}",
                LEVEL_SCHEMA_VERSION, level.schema_version
            ),
        });
    }

    if level.geometry.is_empty() {
        errors.push(ValidationError {
            section: "level",
            index: 0,
            field: "geometry",
            message: "a level needs at least one surface".to_string(),
        });
    }

    for (index, surface) in level.geometry.iter().enumerate() {
        check_size!(errors, "geometry", index, surface);
    }

    for (index, hazard) in level.hazards.iter().enumerate() {
        check_size!(errors, "hazards", index, hazard);

        match &hazard.hazard {
            HazardConfig::Fire { cycle_period_ms } => {
                check_duration(&mut errors, index, "cycle_period_ms", *cycle_period_ms);
            }
            HazardConfig::Saw {
                amplitude,
                period_ms,
                ..
            } => {
                check_duration(&mut errors, index, "period_ms", *period_ms);
                if let Some(amplitude) = amplitude.filter(|amplitude| !amplitude.is_finite()) {
                    errors.push(ValidationError {
                        section: "hazards",
                        index,
                        field: "amplitude",
                        message: format!("must be finite, got {}", amplitude),
                    });
                }
            }
            HazardConfig::FallingPlatform {
                fall_delay_ms,
                respawn_delay_ms,
            } => {
                check_duration(&mut errors, index, "fall_delay_ms", *fall_delay_ms);
                check_duration(&mut errors, index, "respawn_delay_ms", *respawn_delay_ms);
            }
            HazardConfig::Spike | HazardConfig::Trampoline => {}
        }
    }

    if level.kill_plane_y <= level.spawn.1 {
        errors.push(ValidationError {
            section: "level",
            index: 0,
            field: "kill_plane_y",
            message: format!(
                "kill plane {} must lie below spawn y {}",
                level.kill_plane_y, level.spawn.1
            ),
        });
    }

    errors
}
