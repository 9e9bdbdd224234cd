//! Hazards domain: platforms that drop after being stepped on and come back.

use bevy::math::Rect;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformPhase {
    #[default]
    Stable,
    Triggered,
    /// Transient: entered and left within the same update.
    Falling,
    Respawning,
}

/// `Stable -> Triggered -> Falling -> Respawning -> Stable`. Once triggered
/// the sequence runs to completion regardless of further contact.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingPlatform {
    pub phase: PlatformPhase,
    pub original: Rect,
    pub fall_delay_ms: f32,
    pub respawn_delay_ms: f32,
    pub fall_speed: f32,
    pub triggered_elapsed_ms: f32,
    pub fall_elapsed_ms: f32,
    /// Current downward displacement from `original`.
    pub drop: f32,
}

impl FallingPlatform {
    pub fn new(original: Rect, fall_delay_ms: f32, respawn_delay_ms: f32, fall_speed: f32) -> Self {
        Self {
            phase: PlatformPhase::Stable,
            original,
            fall_delay_ms,
            respawn_delay_ms,
            fall_speed,
            triggered_elapsed_ms: 0.0,
            fall_elapsed_ms: 0.0,
            drop: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        let shift = Vec2::new(0.0, self.drop);
        Rect {
            min: self.original.min + shift,
            max: self.original.max + shift,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.phase, PlatformPhase::Stable | PlatformPhase::Triggered)
    }

    /// Only a stable platform can be triggered; returns whether it was.
    pub fn trigger(&mut self) -> bool {
        if self.phase != PlatformPhase::Stable {
            return false;
        }
        self.phase = PlatformPhase::Triggered;
        self.triggered_elapsed_ms = 0.0;
        true
    }

    pub fn update(&mut self, dt_ms: f32) {
        let dt_ms = dt_ms.max(0.0);
        let mut carried_ms = 0.0;

        match self.phase {
            PlatformPhase::Stable | PlatformPhase::Falling => {}
            PlatformPhase::Triggered => {
                self.triggered_elapsed_ms += dt_ms;
                if self.triggered_elapsed_ms >= self.fall_delay_ms {
                    // Overshoot carries over so the reset time stays exact
                    carried_ms = self.triggered_elapsed_ms - self.fall_delay_ms;
                    self.phase = PlatformPhase::Falling;
                    debug!("Platform at {:?} falling", self.original.center());
                }
            }
            PlatformPhase::Respawning => {
                self.fall_elapsed_ms += dt_ms;
                self.drop += self.fall_speed * dt_ms / 1000.0;
                if self.fall_elapsed_ms >= self.respawn_delay_ms {
                    self.reset();
                }
            }
        }

        // Falling hands straight over to Respawning, which owns the timer
        if self.phase == PlatformPhase::Falling {
            self.phase = PlatformPhase::Respawning;
            self.fall_elapsed_ms = carried_ms;
            self.drop = self.fall_speed * carried_ms / 1000.0;
        }
    }

    fn reset(&mut self) {
        self.phase = PlatformPhase::Stable;
        self.triggered_elapsed_ms = 0.0;
        self.fall_elapsed_ms = 0.0;
        self.drop = 0.0;
        debug!("Platform at {:?} respawned", self.original.center());
    }
}
