use bevy::math::{Rect, Vec2};

use super::*;
use crate::content::LevelDef;
use crate::core::GameTuning;
use crate::hazards::{HazardId, HazardKind};

fn fire_elapsed(built: &BuiltLevel) -> f32 {
    match &built.hazards[1].kind {
        HazardKind::Fire(fire) => fire.elapsed_ms,
        other => panic!("expected fire, got {:?}", other),
    }
}

#[test]
fn test_rect_from_top_left() {
    assert_eq!(
        rect_from_top_left(10.0, 20.0, 30.0, 40.0),
        Rect::new(10.0, 20.0, 40.0, 60.0)
    );
}

#[test]
fn test_build_assigns_ids_in_definition_order() {
    let built = build_level(&LevelDef::training_ground(), &GameTuning::default());

    let ids: Vec<HazardId> = built.hazards.iter().map(|hazard| hazard.id).collect();
    assert_eq!(ids, (0..5).map(HazardId).collect::<Vec<_>>());
    let names: Vec<&str> = built.hazards.iter().map(|hazard| hazard.kind_name()).collect();
    assert_eq!(names, vec!["spike", "fire", "saw", "trampoline", "falling_platform"]);

    assert_eq!(built.info.spawn, Vec2::new(-480.0, 376.0));
    assert_eq!(built.info.kill_plane_y, 900.0);
    assert_eq!(built.geometry.surfaces().len(), 7);
}

#[test]
fn test_hazard_overrides_fall_back_to_tuning() {
    let tuning = GameTuning::default();
    let built = build_level(&LevelDef::training_ground(), &tuning);

    match &built.hazards[2].kind {
        HazardKind::Saw(saw) => {
            assert_eq!(saw.amplitude, 80.0);
            assert_eq!(saw.period_ms, tuning.saw_period_ms);
        }
        other => panic!("expected saw, got {:?}", other),
    }
    match &built.hazards[4].kind {
        HazardKind::FallingPlatform(platform) => {
            assert_eq!(platform.fall_delay_ms, tuning.fall_delay_ms);
            assert_eq!(platform.respawn_delay_ms, tuning.respawn_delay_ms);
            assert_eq!(platform.original, built.hazards[4].bounds);
        }
        other => panic!("expected falling platform, got {:?}", other),
    }
}

#[test]
fn test_fire_phase_is_seeded() {
    let tuning = GameTuning::default();
    let def = LevelDef::training_ground();

    let first = fire_elapsed(&build_level(&def, &tuning));
    let second = fire_elapsed(&build_level(&def, &tuning));
    assert_eq!(first, second);
    assert!((0.0..tuning.fire_cycle_ms).contains(&first));
}

#[test]
fn test_only_boxes_can_be_removed() {
    let mut geometry = StaticGeometry::from_defs(&LevelDef::training_ground().geometry);
    let box_id = geometry
        .surfaces()
        .iter()
        .find(|surface| surface.kind == SurfaceKind::Box)
        .map(|surface| surface.id)
        .unwrap();

    assert!(!geometry.remove_box(0));
    assert!(geometry.remove_box(box_id));
    assert!(!geometry.remove_box(box_id));
    assert_eq!(geometry.solids().count(), 6);
}
