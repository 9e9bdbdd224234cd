//! Movement domain: jump, double-jump and wall-jump state machine.

use bevy::prelude::*;

use crate::core::{FrameDelta, GameTuning};
use crate::movement::systems::collisions::Contacts;
use crate::movement::{Actor, ActorInput, Facing, JumpPhase, WallSide};

/// Impulse applied this tick, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpKind {
    /// First jump of a sequence, from the ground or after a reset in the air.
    First,
    Double,
    Wall { direction: f32 },
}

/// Runs after collision resolution so every transition sees this tick's
/// contacts. Requests that are not allowed are dropped without effect.
pub fn update_jump_state(
    actor: &mut Actor,
    contacts: &Contacts,
    input: &ActorInput,
    tuning: &GameTuning,
    delta: FrameDelta,
) -> Option<JumpKind> {
    actor.wall_jump_cooldown_ms = (actor.wall_jump_cooldown_ms - delta.millis()).max(0.0);

    let was_grounded = actor.is_grounded;
    actor.is_grounded = contacts.touching_down;

    if actor.is_grounded && !was_grounded {
        actor.land();
        debug!("Landed at {:?}, jump_count reset", actor.position);
    } else if !actor.is_grounded && actor.phase == JumpPhase::Grounded {
        actor.phase = JumpPhase::Airborne;
    }

    if actor.phase == JumpPhase::WallJumping && actor.forced_horizontal_ms <= 0.0 {
        actor.phase = JumpPhase::Airborne;
    }

    update_wall_slide(actor, contacts, input);

    if !input.jump_pressed {
        return None;
    }

    if actor.is_wall_sliding
        && actor.can_wall_jump
        && actor.wall_jump_cooldown_ms <= 0.0
        && actor.max_jumps > 0
    {
        if let Some(direction) = actor.wall_side.away() {
            wall_jump(actor, direction, tuning);
            return Some(JumpKind::Wall { direction });
        }
    }

    if actor.jump_count >= actor.max_jumps {
        return None;
    }

    let kind = if actor.is_grounded || actor.jump_count == 0 {
        actor.velocity.y = -tuning.jump_speed;
        JumpKind::First
    } else {
        actor.velocity.y = -tuning.double_jump_speed;
        JumpKind::Double
    };

    actor.jump_count += 1;
    actor.is_grounded = false;
    actor.phase = JumpPhase::Airborne;
    actor.leave_wall();

    debug!(
        "{:?} jump: jump_count={}/{}",
        kind, actor.jump_count, actor.max_jumps
    );
    Some(kind)
}

/// Sliding requires falling, airborne, and pushing into a touched wall.
fn update_wall_slide(actor: &mut Actor, contacts: &Contacts, input: &ActorInput) {
    let wall = contacts.wall_toward(input.intent());
    let sliding = !actor.is_grounded && actor.velocity.y > 0.0 && wall != WallSide::None;

    if sliding {
        if !actor.is_wall_sliding {
            debug!("Wall slide started on {:?}", wall);
        }
        actor.is_wall_sliding = true;
        actor.wall_side = wall;
        actor.can_wall_jump = true;
        actor.phase = JumpPhase::WallSliding;
    } else if actor.is_wall_sliding {
        actor.leave_wall();
        actor.phase = if actor.is_grounded {
            JumpPhase::Grounded
        } else {
            JumpPhase::Airborne
        };
    }
}

fn wall_jump(actor: &mut Actor, direction: f32, tuning: &GameTuning) {
    actor.velocity.y = -tuning.wall_jump_speed;
    actor.velocity.x = direction * tuning.wall_jump_speed;
    // Counts as the first jump, one double jump stays available
    actor.jump_count = 1;
    actor.forced_horizontal_direction = direction;
    actor.forced_horizontal_ms = tuning.wall_jump_force_ms;
    actor.wall_jump_cooldown_ms = tuning.wall_jump_cooldown_ms;
    actor.leave_wall();
    actor.phase = JumpPhase::WallJumping;
    if let Some(facing) = Facing::from_direction(direction) {
        actor.facing = facing;
    }

    debug!(
        "Wall jump: direction={}, cooldown={}ms",
        direction, actor.wall_jump_cooldown_ms
    );
}
