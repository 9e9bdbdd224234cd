//! Core domain: tuning and session resources shared by every system.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Every balancing number the simulation reads.
///
/// Loaded from `assets/data/tuning.ron`; missing fields fall back to the
/// defaults below so a tuning file only needs the values it overrides.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub player_speed: f32,
    pub jump_speed: f32,
    /// Second jump impulse, usually weaker than the first.
    pub double_jump_speed: f32,
    pub wall_jump_speed: f32,
    pub wall_slide_speed: f32,
    /// Horizontal drag factor per 60 Hz frame when there is no intent.
    pub drag: f32,
    /// Vertical drag factor per 60 Hz frame while wall-sliding.
    pub wall_drag: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub max_jumps: u8,
    pub wall_jump_force_ms: f32,
    pub wall_jump_cooldown_ms: f32,
    pub actor_width: f32,
    pub actor_height: f32,

    pub max_health: i32,
    pub invincibility_ms: f32,

    pub spike_damage: i32,
    pub fire_damage: i32,
    pub saw_damage: i32,
    pub fire_cycle_ms: f32,
    pub saw_period_ms: f32,
    pub saw_amplitude: f32,
    /// Upward speed imparted by a trampoline; should exceed `jump_speed`.
    pub trampoline_boost: f32,
    pub trampoline_cooldown_ms: f32,
    pub fall_delay_ms: f32,
    pub respawn_delay_ms: f32,
    pub platform_fall_speed: f32,

    /// Ceiling applied to the raw frame time before any timer sees it.
    pub max_frame_delta_ms: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            player_speed: 200.0,
            jump_speed: 400.0,
            double_jump_speed: 350.0,
            wall_jump_speed: 350.0,
            wall_slide_speed: 100.0,
            drag: 0.8,
            wall_drag: 0.6,
            gravity: 800.0,
            max_fall_speed: 900.0,
            max_jumps: 2,
            wall_jump_force_ms: 300.0,
            wall_jump_cooldown_ms: 500.0,
            actor_width: 32.0,
            actor_height: 48.0,

            max_health: 100,
            invincibility_ms: 1000.0,

            spike_damage: 20,
            fire_damage: 15,
            saw_damage: 25,
            fire_cycle_ms: 3000.0,
            saw_period_ms: 2000.0,
            saw_amplitude: 100.0,
            trampoline_boost: 600.0,
            trampoline_cooldown_ms: 300.0,
            fall_delay_ms: 1000.0,
            respawn_delay_ms: 5000.0,
            platform_fall_speed: 300.0,

            max_frame_delta_ms: 33.0,
        }
    }
}

impl GameTuning {
    pub fn actor_size(&self) -> Vec2 {
        Vec2::new(self.actor_width, self.actor_height)
    }

    /// Peak height reached by a jump launched at `speed`: h = v² / (2g)
    pub fn apex_height(&self, speed: f32) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        speed * speed / (2.0 * self.gravity)
    }

    /// Highest point reachable with a full jump sequence from the ground.
    pub fn max_reachable_height(&self) -> f32 {
        let extra_jumps = self.max_jumps.saturating_sub(1) as f32;
        self.apex_height(self.jump_speed) + extra_jumps * self.apex_height(self.double_jump_speed)
    }

    /// Returns human-readable problems with the current values.
    /// None of these are fatal; the loader logs them so a designer notices.
    pub fn balance_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.trampoline_boost <= self.jump_speed {
            warnings.push(format!(
                "trampoline_boost ({}) should exceed jump_speed ({})",
                self.trampoline_boost, self.jump_speed
            ));
        }
        if self.max_jumps == 0 {
            warnings.push("max_jumps is 0, the actor can never jump".to_string());
        }
        for (name, factor) in [("drag", self.drag), ("wall_drag", self.wall_drag)] {
            if !(0.0..=1.0).contains(&factor) {
                warnings.push(format!("{name} ({factor}) must lie in 0..=1"));
            }
        }
        if self.wall_drag > self.drag {
            warnings.push(format!(
                "wall_drag ({}) is weaker than drag ({})",
                self.wall_drag, self.drag
            ));
        }
        if self.fire_cycle_ms <= 0.0 || self.saw_period_ms <= 0.0 {
            warnings.push("hazard periods must be positive".to_string());
        }
        if self.max_frame_delta_ms <= 0.0 {
            warnings.push("max_frame_delta_ms must be positive".to_string());
        }

        warnings
    }
}

/// Who the local player is and which level to load.
#[derive(Resource, Debug, Clone)]
pub struct SessionConfig {
    pub player_id: String,
    pub level: String,
    pub content_root: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_id: "local".to_string(),
            level: "training_ground".to_string(),
            content_root: PathBuf::from("assets"),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by `HAZARD_RUN_PLAYER` and `HAZARD_RUN_LEVEL`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var("HAZARD_RUN_PLAYER").ok(),
            std::env::var("HAZARD_RUN_LEVEL").ok(),
        )
    }

    pub fn with_overrides(mut self, player_id: Option<String>, level: Option<String>) -> Self {
        if let Some(player_id) = player_id.filter(|id| !id.trim().is_empty()) {
            self.player_id = player_id;
        }
        if let Some(level) = level.filter(|name| !name.trim().is_empty()) {
            self.level = level;
        }
        self
    }
}
