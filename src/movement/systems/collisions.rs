//! Movement domain: position integration against solid rectangles and
//! contact detection.
//!
//! Movement is resolved one axis at a time (x, then y). After resolution,
//! thin probe strips around the actor report which sides are in contact,
//! so an actor resting against a surface still reads as touching it.

use bevy::math::Rect;
use bevy::prelude::*;

use crate::core::FrameDelta;
use crate::movement::{Actor, WallSide};

/// Depth of the probe strips used for contact flags.
pub const CONTACT_PROBE: f32 = 1.0;
/// Probes are inset from the corners so a floor does not read as a wall.
const PROBE_INSET: f32 = 2.0;
/// Overlaps thinner than this are treated as touching, not penetrating.
const SKIN: f32 = 0.001;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub touching_down: bool,
    pub touching_up: bool,
    pub touching_left: bool,
    pub touching_right: bool,
}

impl Contacts {
    /// The wall the actor is pushing into, if `intent` points at one.
    pub fn wall_toward(&self, intent: i8) -> WallSide {
        match intent {
            i if i < 0 && self.touching_left => WallSide::Left,
            i if i > 0 && self.touching_right => WallSide::Right,
            _ => WallSide::None,
        }
    }
}

/// Strict overlap: rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    let shared = a.intersect(b);
    shared.width() > SKIN && shared.height() > SKIN
}

/// Moves the actor by its velocity and clamps it to non-penetrating
/// placement. Velocity on a blocked axis is zeroed.
pub fn resolve_collisions(actor: &mut Actor, solids: &[Rect], delta: FrameDelta) -> Contacts {
    let mut contacts = Contacts::default();
    depenetrate(actor, solids);

    let step = actor.velocity * delta.secs();
    let half = actor.size / 2.0;

    actor.position.x += step.x;
    for solid in solids {
        if !overlaps(actor.bounds(), *solid) {
            continue;
        }
        if step.x > 0.0 {
            actor.position.x = solid.min.x - half.x;
            contacts.touching_right = true;
        } else if step.x < 0.0 {
            actor.position.x = solid.max.x + half.x;
            contacts.touching_left = true;
        }
        actor.velocity.x = 0.0;
    }

    actor.position.y += step.y;
    for solid in solids {
        if !overlaps(actor.bounds(), *solid) {
            continue;
        }
        if step.y > 0.0 {
            actor.position.y = solid.min.y - half.y;
            contacts.touching_down = true;
        } else if step.y < 0.0 {
            actor.position.y = solid.max.y + half.y;
            contacts.touching_up = true;
        }
        actor.velocity.y = 0.0;
    }

    let probed = probe_contacts(actor.bounds(), solids);
    contacts.touching_down |= probed.touching_down;
    contacts.touching_up |= probed.touching_up;
    contacts.touching_left |= probed.touching_left;
    contacts.touching_right |= probed.touching_right;
    contacts
}

/// Contact flags for a box that is not moving.
pub fn probe_contacts(bounds: Rect, solids: &[Rect]) -> Contacts {
    let below = Rect::new(
        bounds.min.x + PROBE_INSET,
        bounds.max.y,
        bounds.max.x - PROBE_INSET,
        bounds.max.y + CONTACT_PROBE,
    );
    let above = Rect::new(
        bounds.min.x + PROBE_INSET,
        bounds.min.y - CONTACT_PROBE,
        bounds.max.x - PROBE_INSET,
        bounds.min.y,
    );
    let left = Rect::new(
        bounds.min.x - CONTACT_PROBE,
        bounds.min.y + PROBE_INSET,
        bounds.min.x,
        bounds.max.y - PROBE_INSET,
    );
    let right = Rect::new(
        bounds.max.x,
        bounds.min.y + PROBE_INSET,
        bounds.max.x + CONTACT_PROBE,
        bounds.max.y - PROBE_INSET,
    );

    let hits = |strip: Rect| solids.iter().any(|solid| overlaps(strip, *solid));

    Contacts {
        touching_down: hits(below),
        touching_up: hits(above),
        touching_left: hits(left),
        touching_right: hits(right),
    }
}

/// Minimum-translation push out of anything the actor already overlaps,
/// e.g. a platform that respawned around it.
fn depenetrate(actor: &mut Actor, solids: &[Rect]) {
    for solid in solids {
        let bounds = actor.bounds();
        if !overlaps(bounds, *solid) {
            continue;
        }

        let shared = bounds.intersect(*solid);
        let away = bounds.center() - solid.center();
        if shared.width() < shared.height() {
            let direction = if away.x < 0.0 { -1.0 } else { 1.0 };
            actor.position.x += direction * shared.width();
        } else {
            let direction = if away.y < 0.0 { -1.0 } else { 1.0 };
            actor.position.y += direction * shared.height();
            if direction < 0.0 && actor.velocity.y > 0.0 {
                actor.velocity.y = 0.0;
            }
        }

        debug!(
            "Depenetrated actor from solid at {:?}, now at {:?}",
            solid.center(),
            actor.position
        );
    }
}
