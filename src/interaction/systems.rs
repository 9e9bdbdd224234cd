//! Interaction domain: ECS wrapper around the tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{FrameDelta, GameTuning};
use crate::hazards::Hazard;
use crate::interaction::events::CollisionEvent;
use crate::interaction::tick::{TickContext, run_tick};
use crate::level::{ActiveLevel, StaticGeometry};
use crate::movement::{Actor, ActorInput, LocalActor};
use crate::net::NetOutbox;

pub(crate) fn simulate_local_actor(
    input: Res<ActorInput>,
    tuning: Res<GameTuning>,
    delta: Res<FrameDelta>,
    geometry: Res<StaticGeometry>,
    level: Option<Res<ActiveLevel>>,
    mut actors: Query<(&LocalActor, &mut Actor)>,
    mut hazards: Query<&mut Hazard>,
    mut outbox: ResMut<NetOutbox>,
    mut collisions: MessageWriter<CollisionEvent>,
) {
    let Some(level) = level else {
        return;
    };
    let Ok((local, mut actor)) = actors.single_mut() else {
        return;
    };

    let mut ordered: Vec<Mut<Hazard>> = hazards.iter_mut().collect();
    ordered.sort_by_key(|hazard| hazard.id);

    let ctx = TickContext {
        player_id: &local.player_id,
        input: *input,
        geometry: &geometry,
        level: &level,
        tuning: &tuning,
        delta: *delta,
    };
    let report = run_tick(&ctx, &mut actor, &mut ordered);

    for event in report.collisions {
        collisions.write(event);
    }
    outbox.extend(report.outbound);
}
