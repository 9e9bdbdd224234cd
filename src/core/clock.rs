//! Core domain: the clamped frame clock.

use bevy::prelude::*;

use crate::core::resources::GameTuning;

/// Reference frame length used to express per-frame drag factors.
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

/// Frame time consumed by every timer and integrator in a tick.
///
/// Always finite and within `0..=max_frame_delta_ms`, so a hitch or a
/// backgrounded tab cannot skip hazards through several states at once.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDelta {
    ms: f32,
}

impl FrameDelta {
    pub fn clamped(raw_ms: f32, ceiling_ms: f32) -> Self {
        if !raw_ms.is_finite() {
            return Self::default();
        }
        Self {
            ms: raw_ms.clamp(0.0, ceiling_ms.max(0.0)),
        }
    }

    pub fn millis(&self) -> f32 {
        self.ms
    }

    pub fn secs(&self) -> f32 {
        self.ms / 1000.0
    }

    /// Scales a per-reference-frame factor to this delta: `factor^(dt / 16.67ms)`.
    pub fn scale_factor(&self, per_frame: f32) -> f32 {
        per_frame.clamp(0.0, 1.0).powf(self.ms / REFERENCE_FRAME_MS)
    }
}

pub(crate) fn advance_frame_delta(
    time: Res<Time>,
    tuning: Res<GameTuning>,
    mut delta: ResMut<FrameDelta>,
) {
    let raw_ms = time.delta_secs() * 1000.0;
    *delta = FrameDelta::clamped(raw_ms, tuning.max_frame_delta_ms);

    if raw_ms > tuning.max_frame_delta_ms {
        debug!(
            "Frame hitch: raw={:.1}ms clamped to {:.1}ms",
            raw_ms,
            delta.millis()
        );
    }
}
