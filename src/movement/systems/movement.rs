//! Movement domain: horizontal control, drag, gravity and the wall-jump
//! forced window.

use crate::core::{FrameDelta, GameTuning};
use crate::movement::{Actor, ActorInput, Facing};

/// Horizontal speeds below this settle to zero once drag takes over.
const SETTLE_SPEED: f32 = 1.0;

/// Advances timers owned by the actor itself.
pub fn tick_actor_timers(actor: &mut Actor, delta: FrameDelta) {
    actor.invincibility.tick(delta.millis());
}

/// Integrates velocity for one tick. Position is left to the collision
/// resolver.
pub fn apply_movement(actor: &mut Actor, input: &ActorInput, tuning: &GameTuning, delta: FrameDelta) {
    let intent = input.intent();

    if actor.forced_horizontal_ms > 0.0 {
        // Player intent is ignored until the launch window closes
        actor.velocity.x = actor.forced_horizontal_direction * tuning.wall_jump_speed;
        actor.forced_horizontal_ms = (actor.forced_horizontal_ms - delta.millis()).max(0.0);
    } else if intent != 0 {
        actor.velocity.x = intent as f32 * tuning.player_speed;
        if let Some(facing) = Facing::from_direction(intent as f32) {
            actor.facing = facing;
        }
    } else if !actor.is_wall_sliding {
        actor.velocity.x *= delta.scale_factor(tuning.drag);
        if actor.velocity.x.abs() < SETTLE_SPEED {
            actor.velocity.x = 0.0;
        }
    }

    actor.velocity.y += tuning.gravity * delta.secs();

    if actor.is_wall_sliding && actor.velocity.y > 0.0 {
        actor.velocity.y *= delta.scale_factor(tuning.wall_drag);
        actor.velocity.y = actor.velocity.y.min(tuning.wall_slide_speed);
    }

    actor.velocity.y = actor.velocity.y.min(tuning.max_fall_speed);
}
