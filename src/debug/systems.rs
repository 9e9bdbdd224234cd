use bevy::prelude::*;

use crate::debug::{DebugInfoOverlay, DebugState};
use crate::hazards::Hazard;
use crate::level::StaticGeometry;
use crate::movement::{Actor, LocalActor};

pub(crate) fn toggle_debug_views(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_outlines = !debug_state.show_outlines;
        info!("[DEBUG] Collision outlines {}", on_off(debug_state.show_outlines));
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    actor_query: Query<&Actor, With<LocalActor>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok(actor), Ok(mut text)) = (actor_query.single(), overlay_query.single_mut()) {
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nPhase: {:?}\nJumps: {}/{}\nWall: {:?}\nHP: {}/{} ({:.0}%)\nInvincible: {:.0}ms",
            actor.position.x,
            actor.position.y,
            actor.velocity.x,
            actor.velocity.y,
            actor.phase,
            actor.jump_count,
            actor.max_jumps,
            actor.wall_side,
            actor.health.current,
            actor.health.max,
            actor.health.percent() * 100.0,
            actor.invincibility.remaining_ms
        );
    }
}

/// Outlines in world space; simulation y is flipped like the sprites.
pub(crate) fn draw_collision_outlines(
    mut gizmos: Gizmos,
    geometry: Res<StaticGeometry>,
    hazards: Query<&Hazard>,
    actors: Query<&Actor, With<LocalActor>>,
) {
    let flip = |rect: Rect| Vec2::new(rect.center().x, -rect.center().y);

    for surface in geometry.surfaces() {
        gizmos.rect_2d(flip(surface.bounds), surface.bounds.size(), Color::srgb(0.3, 0.8, 1.0));
    }

    for hazard in &hazards {
        let color = if hazard.is_dangerous() {
            Color::srgb(1.0, 0.2, 0.2)
        } else if hazard.is_solid() {
            Color::srgb(0.3, 0.8, 1.0)
        } else {
            Color::srgb(0.9, 0.9, 0.3)
        };
        gizmos.rect_2d(flip(hazard.bounds), hazard.bounds.size(), color);
    }

    for actor in &actors {
        gizmos.rect_2d(flip(actor.bounds()), actor.size, Color::srgb(0.3, 1.0, 0.3));
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
