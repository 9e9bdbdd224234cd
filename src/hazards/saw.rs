//! Hazards domain: saw blades oscillating along one axis.

use bevy::math::Rect;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SawAxis {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SawMotion {
    #[default]
    Sine,
    /// Constant-speed back and forth (triangle wave).
    PingPong,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Saw {
    pub origin: Rect,
    pub axis: SawAxis,
    pub motion: SawMotion,
    pub amplitude: f32,
    pub period_ms: f32,
    pub elapsed_ms: f32,
}

impl Saw {
    pub fn new(origin: Rect, axis: SawAxis, motion: SawMotion, amplitude: f32, period_ms: f32) -> Self {
        Self {
            origin,
            axis,
            motion,
            amplitude,
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn update(&mut self, dt_ms: f32) {
        if self.period_ms <= 0.0 {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)) % self.period_ms;
    }

    pub fn bounds(&self) -> Rect {
        let offset = path_offset(self.motion, self.elapsed_ms, self.period_ms, self.amplitude);
        let shift = match self.axis {
            SawAxis::Horizontal => Vec2::new(offset, 0.0),
            SawAxis::Vertical => Vec2::new(0.0, offset),
        };
        Rect {
            min: self.origin.min + shift,
            max: self.origin.max + shift,
        }
    }
}

/// Displacement from the origin after `elapsed_ms`. Both paths start at
/// zero and reach `+amplitude` at a quarter period.
pub fn path_offset(motion: SawMotion, elapsed_ms: f32, period_ms: f32, amplitude: f32) -> f32 {
    if period_ms <= 0.0 {
        return 0.0;
    }
    let t = (elapsed_ms % period_ms) / period_ms;
    match motion {
        SawMotion::Sine => amplitude * (TAU * t).sin(),
        SawMotion::PingPong => {
            let wave = if t < 0.25 {
                4.0 * t
            } else if t < 0.75 {
                2.0 - 4.0 * t
            } else {
                4.0 * t - 4.0
            };
            amplitude * wave
        }
    }
}
