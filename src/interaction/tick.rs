//! Interaction domain: one simulation tick for the local actor.
//!
//! Order is fixed: timers, movement, collision resolution, jump state,
//! then hazards in id order, then the respawn check. Everything a tick
//! produces comes back in the `TickReport`; nothing here touches the ECS.

use std::ops::DerefMut;

use bevy::math::Rect;
use bevy::prelude::*;

use crate::core::{FrameDelta, GameTuning};
use crate::hazards::{Hazard, HazardKind};
use crate::interaction::events::{CollisionEvent, CollisionKind};
use crate::level::{ActiveLevel, StaticGeometry};
use crate::movement::{
    Actor, ActorInput, CONTACT_PROBE, Contacts, JumpKind, apply_movement, overlaps,
    resolve_collisions, tick_actor_timers, update_jump_state,
};
use crate::net::OutboundMessage;

/// Read-only inputs shared by every step of a tick.
pub struct TickContext<'a> {
    pub player_id: &'a str,
    pub input: ActorInput,
    pub geometry: &'a StaticGeometry,
    pub level: &'a ActiveLevel,
    pub tuning: &'a GameTuning,
    pub delta: FrameDelta,
}

#[derive(Debug, Default)]
pub struct TickReport {
    pub contacts: Contacts,
    pub jump: Option<JumpKind>,
    pub collisions: Vec<CollisionEvent>,
    pub outbound: Vec<OutboundMessage>,
    pub respawned: bool,
}

/// Advances the actor and every hazard by one frame. `hazards` must already
/// be sorted by id.
pub fn run_tick<H>(ctx: &TickContext, actor: &mut Actor, hazards: &mut [H]) -> TickReport
where
    H: DerefMut<Target = Hazard>,
{
    let mut report = TickReport::default();

    tick_actor_timers(actor, ctx.delta);
    apply_movement(actor, &ctx.input, ctx.tuning, ctx.delta);

    let solids: Vec<Rect> = ctx
        .geometry
        .solids()
        .chain(
            hazards
                .iter()
                .filter(|hazard| hazard.is_solid())
                .map(|hazard| hazard.bounds),
        )
        .collect();
    report.contacts = resolve_collisions(actor, &solids, ctx.delta);

    report.jump = update_jump_state(actor, &report.contacts, &ctx.input, ctx.tuning, ctx.delta);
    if let Some(kind) = report.jump {
        report
            .outbound
            .push(OutboundMessage::jump(ctx.player_id, kind, actor));
    }

    for hazard in hazards.iter_mut() {
        hazard.update(ctx.delta.millis());

        if !overlaps(hazard_reach(actor.bounds(), hazard), hazard.bounds) {
            continue;
        }
        let Some(effect) = hazard.trigger(actor, ctx.tuning) else {
            continue;
        };

        report.collisions.push(CollisionEvent {
            actor_id: ctx.player_id.to_string(),
            hazard_id: hazard.id,
            kind: CollisionKind::from(effect),
        });
        if let Some(message) = OutboundMessage::hazard(ctx.player_id, hazard, effect, actor) {
            report.outbound.push(message);
        }
    }

    if actor.health.is_dead() || actor.position.y > ctx.level.kill_plane_y {
        info!(
            "Player '{}' respawning (health={}, y={:.1})",
            ctx.player_id, actor.health.current, actor.position.y
        );
        actor.respawn(ctx.level.spawn, ctx.tuning);
        report.respawned = true;
        report.outbound.push(OutboundMessage::PlayerRespawned {
            player_id: ctx.player_id.to_string(),
            x: actor.position.x,
            y: actor.position.y,
        });
    }

    report
}

/// Area of the actor tested against a hazard. Falling platforms also count
/// an actor resting on their top edge; everything else needs real overlap.
fn hazard_reach(actor_bounds: Rect, hazard: &Hazard) -> Rect {
    match hazard.kind {
        HazardKind::FallingPlatform(_) => Rect {
            min: actor_bounds.min,
            max: Vec2::new(actor_bounds.max.x, actor_bounds.max.y + CONTACT_PROBE),
        },
        _ => actor_bounds,
    }
}
