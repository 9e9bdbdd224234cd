use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::GameTuning;
use crate::hazards::{Hazard, HazardKind, PlatformPhase};
use crate::interaction::CollisionEvent;
use crate::level::{StaticGeometry, SurfaceKind};
use crate::movement::{Actor, Facing, LocalActor};
use crate::net::RemoteActor;
use crate::presentation::{DamageFlash, SurfaceSprite, world_position};

const SURFACE_Z: f32 = 0.0;
const HAZARD_Z: f32 = 1.0;
const REMOTE_Z: f32 = 2.0;
const ACTOR_Z: f32 = 3.0;

const FLASH_SECS: f32 = 0.2;

fn surface_color(kind: SurfaceKind) -> Color {
    match kind {
        SurfaceKind::Ground => Color::srgb(0.35, 0.3, 0.25),
        SurfaceKind::Platform => Color::srgb(0.5, 0.45, 0.35),
        SurfaceKind::Wall => Color::srgb(0.3, 0.3, 0.35),
        SurfaceKind::Box => Color::srgb(0.6, 0.4, 0.2),
    }
}

fn hazard_color(hazard: &Hazard) -> Color {
    match &hazard.kind {
        HazardKind::Spike => Color::srgb(0.75, 0.75, 0.8),
        HazardKind::Fire(fire) if fire.is_dangerous() => Color::srgb(1.0, 0.45, 0.1),
        HazardKind::Fire(_) => Color::srgba(0.4, 0.15, 0.1, 0.6),
        HazardKind::Saw(_) => Color::srgb(0.85, 0.85, 0.9),
        HazardKind::Trampoline(trampoline) if trampoline.is_compressed() => {
            Color::srgb(0.5, 1.0, 0.5)
        }
        HazardKind::Trampoline(_) => Color::srgb(0.2, 0.7, 0.3),
        HazardKind::FallingPlatform(platform) => match platform.phase {
            PlatformPhase::Stable => Color::srgb(0.55, 0.4, 0.25),
            PlatformPhase::Triggered => Color::srgb(0.8, 0.6, 0.3),
            PlatformPhase::Falling | PlatformPhase::Respawning => {
                Color::srgba(0.55, 0.4, 0.25, 0.3)
            }
        },
    }
}

fn placed(position: Vec2, z: f32) -> Transform {
    Transform::from_translation(world_position(position).extend(z))
}

/// Rebuilds surface sprites whenever the geometry changes (level build,
/// destroyed boxes).
pub(crate) fn sync_geometry_sprites(
    mut commands: Commands,
    geometry: Res<StaticGeometry>,
    existing: Query<Entity, With<SurfaceSprite>>,
) {
    if !geometry.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for surface in geometry.surfaces() {
        commands.spawn((
            SurfaceSprite,
            Sprite {
                color: surface_color(surface.kind),
                custom_size: Some(surface.bounds.size()),
                ..default()
            },
            placed(surface.bounds.center(), SURFACE_Z),
        ));
    }
}

pub(crate) fn attach_hazard_sprites(mut commands: Commands, hazards: Query<(Entity, &Hazard), Added<Hazard>>) {
    for (entity, hazard) in &hazards {
        commands.entity(entity).insert((
            Sprite {
                color: hazard_color(hazard),
                custom_size: Some(hazard.bounds.size()),
                ..default()
            },
            placed(hazard.bounds.center(), HAZARD_Z),
        ));
    }
}

pub(crate) fn attach_actor_sprites(mut commands: Commands, actors: Query<(Entity, &Actor), Added<LocalActor>>) {
    for (entity, actor) in &actors {
        commands.entity(entity).insert((
            Sprite {
                color: Color::srgb(0.3, 0.6, 1.0),
                custom_size: Some(actor.size),
                ..default()
            },
            placed(actor.position, ACTOR_Z),
            DamageFlash::default(),
        ));
    }
}

pub(crate) fn attach_remote_sprites(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    remotes: Query<(Entity, &RemoteActor), Added<RemoteActor>>,
) {
    for (entity, remote) in &remotes {
        commands.entity(entity).insert((
            Sprite {
                color: Color::srgb(0.7, 0.4, 0.9),
                custom_size: Some(tuning.actor_size()),
                ..default()
            },
            placed(remote.position, REMOTE_Z),
        ));
    }
}

pub(crate) fn flash_on_damage(
    time: Res<Time>,
    mut collisions: MessageReader<CollisionEvent>,
    mut flashes: Query<(&LocalActor, &mut DamageFlash)>,
) {
    let hit_players: Vec<&str> = collisions
        .read()
        .filter(|event| event.dealt_damage())
        .map(|event| event.actor_id.as_str())
        .collect();

    for (local, mut flash) in &mut flashes {
        if hit_players.contains(&local.player_id.as_str()) {
            flash.remaining_secs = FLASH_SECS;
        } else if flash.remaining_secs > 0.0 {
            flash.remaining_secs = (flash.remaining_secs - time.delta_secs()).max(0.0);
        }
    }
}

pub(crate) fn sync_hazard_sprites(mut hazards: Query<(&Hazard, &mut Sprite, &mut Transform)>) {
    for (hazard, mut sprite, mut transform) in &mut hazards {
        sprite.color = hazard_color(hazard);
        sprite.custom_size = Some(hazard.bounds.size());
        *transform = placed(hazard.bounds.center(), HAZARD_Z);
    }
}

pub(crate) fn sync_actor_sprites(
    time: Res<Time>,
    mut actors: Query<(&Actor, &DamageFlash, &mut Sprite, &mut Transform), With<LocalActor>>,
) {
    for (actor, flash, mut sprite, mut transform) in &mut actors {
        *transform = placed(actor.position, ACTOR_Z);
        sprite.flip_x = actor.facing == Facing::Left;

        let base = if flash.remaining_secs > 0.0 {
            Color::srgb(1.0, 0.25, 0.25)
        } else {
            Color::srgb(0.3, 0.6, 1.0)
        };
        // Blink while invincible
        let visible = !actor.is_invincible() || (time.elapsed_secs() * 10.0) as i32 % 2 == 0;
        sprite.color = if visible { base } else { base.with_alpha(0.3) };
    }
}

pub(crate) fn sync_remote_sprites(mut remotes: Query<(&RemoteActor, &mut Sprite, &mut Transform)>) {
    for (remote, mut sprite, mut transform) in &mut remotes {
        *transform = placed(remote.position, REMOTE_Z);
        sprite.flip_x = remote.facing == Facing::Left;
    }
}
