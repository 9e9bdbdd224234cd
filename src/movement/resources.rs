//! Movement domain: per-frame input resources.

use bevy::prelude::*;

/// Input for one tick. `jump_pressed` is a rising edge, never a held level.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorInput {
    pub move_intent: i8,
    pub jump_pressed: bool,
}

impl ActorInput {
    pub fn new(move_intent: i32, jump_pressed: bool) -> Self {
        Self {
            move_intent: move_intent.signum() as i8,
            jump_pressed,
        }
    }

    /// Horizontal intent clamped to -1, 0 or 1.
    pub fn intent(&self) -> i8 {
        self.move_intent.signum()
    }
}

/// Turns a held jump level into a single press.
#[derive(Resource, Debug, Default)]
pub struct JumpLatch {
    held: bool,
}

impl JumpLatch {
    pub fn press(&mut self, down: bool) -> bool {
        let edge = down && !self.held;
        self.held = down;
        edge
    }
}
