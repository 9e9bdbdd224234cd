//! Movement domain: keyboard sampling for the local actor.

use bevy::prelude::*;

use crate::movement::{ActorInput, JumpLatch};

pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut latch: ResMut<JumpLatch>,
    mut input: ResMut<ActorInput>,
) {
    let mut x = 0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1;
    }

    // Several keys map to jump; the latch keeps it to one press per hold.
    let jump_down = keyboard.pressed(KeyCode::Space)
        || keyboard.pressed(KeyCode::KeyW)
        || keyboard.pressed(KeyCode::ArrowUp);

    *input = ActorInput::new(x, latch.press(jump_down));
}
