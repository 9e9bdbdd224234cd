//! Level domain: turning a level definition into geometry, hazards and a
//! spawned local actor.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{HazardConfig, HazardDef, LevelDef, PendingLevel};
use crate::core::{GameTuning, SessionConfig};
use crate::hazards::{FallingPlatform, Fire, Hazard, HazardId, HazardKind, Saw, Trampoline};
use crate::level::geometry::{StaticGeometry, rect_from_top_left};
use crate::movement::{Actor, LocalActor};

/// Spawn point and kill plane of the level being played.
#[derive(Resource, Debug, Clone)]
pub struct ActiveLevel {
    pub name: String,
    pub spawn: Vec2,
    pub kill_plane_y: f32,
}

#[derive(Debug)]
pub struct BuiltLevel {
    pub info: ActiveLevel,
    pub geometry: StaticGeometry,
    pub hazards: Vec<Hazard>,
}

/// Pure build step. Hazard ids follow definition order; fire phases are
/// drawn from a generator seeded by the level seed.
pub fn build_level(def: &LevelDef, tuning: &GameTuning) -> BuiltLevel {
    let mut rng = ChaCha8Rng::seed_from_u64(def.seed);

    let hazards = def
        .hazards
        .iter()
        .enumerate()
        .map(|(index, hazard)| build_hazard(HazardId(index as u32), hazard, tuning, &mut rng))
        .collect();

    BuiltLevel {
        info: ActiveLevel {
            name: def.name.clone(),
            spawn: Vec2::new(def.spawn.0, def.spawn.1),
            kill_plane_y: def.kill_plane_y,
        },
        geometry: StaticGeometry::from_defs(&def.geometry),
        hazards,
    }
}

fn build_hazard(id: HazardId, def: &HazardDef, tuning: &GameTuning, rng: &mut ChaCha8Rng) -> Hazard {
    let bounds = rect_from_top_left(def.x, def.y, def.width, def.height);

    let kind = match &def.hazard {
        HazardConfig::Spike => HazardKind::Spike,
        HazardConfig::Fire { cycle_period_ms } => {
            let period = cycle_period_ms.unwrap_or(tuning.fire_cycle_ms);
            let offset = if period.is_finite() && period > 0.0 {
                rng.random_range(0.0..period)
            } else {
                0.0
            };
            HazardKind::Fire(Fire::new(period, offset))
        }
        HazardConfig::Saw {
            axis,
            motion,
            amplitude,
            period_ms,
        } => HazardKind::Saw(Saw::new(
            bounds,
            *axis,
            *motion,
            amplitude.unwrap_or(tuning.saw_amplitude),
            period_ms.unwrap_or(tuning.saw_period_ms),
        )),
        HazardConfig::Trampoline => HazardKind::Trampoline(Trampoline::default()),
        HazardConfig::FallingPlatform {
            fall_delay_ms,
            respawn_delay_ms,
        } => HazardKind::FallingPlatform(FallingPlatform::new(
            bounds,
            fall_delay_ms.unwrap_or(tuning.fall_delay_ms),
            respawn_delay_ms.unwrap_or(tuning.respawn_delay_ms),
            tuning.platform_fall_speed,
        )),
    };

    Hazard::new(id, bounds, kind)
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    session: Res<SessionConfig>,
    mut pending: ResMut<PendingLevel>,
) {
    let def = pending.0.take().unwrap_or_else(LevelDef::training_ground);
    let built = build_level(&def, &tuning);

    info!(
        "Building level '{}': surfaces={}, hazards={}, spawn={:?}",
        built.info.name,
        built.geometry.surfaces().len(),
        built.hazards.len(),
        built.info.spawn
    );

    for hazard in built.hazards {
        commands.spawn(hazard);
    }

    commands.spawn((
        LocalActor {
            player_id: session.player_id.clone(),
        },
        Actor::spawn(built.info.spawn, &tuning),
    ));

    commands.insert_resource(built.geometry);
    commands.insert_resource(built.info);
}
