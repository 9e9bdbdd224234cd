use bevy::math::{Rect, Vec2};

use super::*;
use crate::core::{FrameDelta, GameTuning};

fn frame() -> FrameDelta {
    FrameDelta::clamped(16.0, 33.0)
}

fn grounded_actor(tuning: &GameTuning) -> Actor {
    Actor::spawn(Vec2::ZERO, tuning)
}

fn airborne_actor(tuning: &GameTuning) -> Actor {
    let mut actor = Actor::spawn(Vec2::ZERO, tuning);
    actor.is_grounded = false;
    actor.phase = JumpPhase::Airborne;
    actor
}

// ----------------------------------------------------------------------------
// Input
// ----------------------------------------------------------------------------

#[test]
fn test_actor_input_clamps_intent() {
    assert_eq!(ActorInput::new(5, false).intent(), 1);
    assert_eq!(ActorInput::new(-3, false).intent(), -1);
    assert_eq!(ActorInput::new(0, true).intent(), 0);
}

#[test]
fn test_jump_latch_only_fires_on_press() {
    let mut latch = JumpLatch::default();
    assert!(latch.press(true));
    assert!(!latch.press(true));
    assert!(!latch.press(false));
    assert!(latch.press(true));
}

// ----------------------------------------------------------------------------
// Horizontal control and gravity
// ----------------------------------------------------------------------------

#[test]
fn test_intent_sets_velocity_and_facing() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);

    apply_movement(&mut actor, &ActorInput::new(-1, false), &tuning, frame());
    assert_eq!(actor.velocity.x, -200.0);
    assert_eq!(actor.facing, Facing::Left);
}

#[test]
fn test_drag_settles_horizontal_velocity() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);
    actor.velocity.x = 200.0;

    apply_movement(&mut actor, &ActorInput::default(), &tuning, frame());
    assert!(actor.velocity.x < 200.0 && actor.velocity.x > 0.0);

    for _ in 0..100 {
        apply_movement(&mut actor, &ActorInput::default(), &tuning, frame());
    }
    assert_eq!(actor.velocity.x, 0.0);
}

#[test]
fn test_fall_speed_is_capped() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.velocity.y = 895.0;

    apply_movement(&mut actor, &ActorInput::default(), &tuning, frame());
    assert_eq!(actor.velocity.y, tuning.max_fall_speed);
}

#[test]
fn test_wall_slide_caps_descent() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.is_wall_sliding = true;
    actor.velocity.y = 400.0;

    apply_movement(&mut actor, &ActorInput::new(1, false), &tuning, frame());
    assert_eq!(actor.velocity.y, tuning.wall_slide_speed);
}

#[test]
fn test_invincibility_counts_down() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);
    actor.invincibility.start(20.0);

    tick_actor_timers(&mut actor, frame());
    assert!(actor.is_invincible());
    tick_actor_timers(&mut actor, frame());
    assert!(!actor.is_invincible());
}

// ----------------------------------------------------------------------------
// Collision resolution
// ----------------------------------------------------------------------------

#[test]
fn test_edge_contact_is_not_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
    assert!(overlaps(a, Rect::new(9.0, 0.0, 20.0, 10.0)));
}

#[test]
fn test_landing_clamps_to_surface_top() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.velocity.y = 100.0;
    let ground = Rect::new(-100.0, 25.0, 100.0, 60.0);

    let contacts = resolve_collisions(&mut actor, &[ground], frame());
    assert!(contacts.touching_down);
    assert_eq!(actor.position.y, 1.0);
    assert_eq!(actor.velocity.y, 0.0);
}

#[test]
fn test_running_into_wall_stops_horizontal_motion() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);
    actor.velocity.x = 200.0;
    let wall = Rect::new(18.0, -100.0, 40.0, 100.0);

    let contacts = resolve_collisions(&mut actor, &[wall], frame());
    assert!(contacts.touching_right);
    assert!(!contacts.touching_down);
    assert_eq!(actor.position.x, 2.0);
    assert_eq!(actor.velocity.x, 0.0);
}

#[test]
fn test_overlapping_actor_is_pushed_out() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);
    let slab = Rect::new(-100.0, 20.0, 100.0, 60.0);

    let contacts = resolve_collisions(&mut actor, &[slab], frame());
    assert_eq!(actor.position.y, -4.0);
    assert!(contacts.touching_down);
}

#[test]
fn test_probe_reports_resting_contacts() {
    let bounds = Rect::new(0.0, 0.0, 32.0, 48.0);
    let floor = Rect::new(-100.0, 48.0, 100.0, 80.0);
    let left_wall = Rect::new(-20.0, -100.0, 0.0, 100.0);

    let contacts = probe_contacts(bounds, &[floor, left_wall]);
    assert!(contacts.touching_down);
    assert!(contacts.touching_left);
    assert!(!contacts.touching_right);
    assert!(!contacts.touching_up);
}

// ----------------------------------------------------------------------------
// Jump state machine
// ----------------------------------------------------------------------------

#[test]
fn test_jump_ignored_when_count_exhausted() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.jump_count = 2;
    actor.velocity.y = -10.0;

    let kind = update_jump_state(
        &mut actor,
        &Contacts::default(),
        &ActorInput::new(0, true),
        &tuning,
        frame(),
    );
    assert_eq!(kind, None);
    assert_eq!(actor.velocity.y, -10.0);
    assert_eq!(actor.jump_count, 2);
}

#[test]
fn test_walking_off_ledge_keeps_full_jump() {
    let tuning = GameTuning::default();
    let mut actor = grounded_actor(&tuning);

    // Ground contact lost without jumping
    update_jump_state(&mut actor, &Contacts::default(), &ActorInput::default(), &tuning, frame());
    assert_eq!(actor.phase, JumpPhase::Airborne);
    assert_eq!(actor.jump_count, 0);

    let kind = update_jump_state(
        &mut actor,
        &Contacts::default(),
        &ActorInput::new(0, true),
        &tuning,
        frame(),
    );
    assert_eq!(kind, Some(JumpKind::First));
    assert_eq!(actor.velocity.y, -tuning.jump_speed);
}

#[test]
fn test_landing_resets_jump_count() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.jump_count = 2;
    let floor = Contacts {
        touching_down: true,
        ..Default::default()
    };

    update_jump_state(&mut actor, &floor, &ActorInput::default(), &tuning, frame());
    assert!(actor.is_grounded);
    assert_eq!(actor.jump_count, 0);
    assert_eq!(actor.phase, JumpPhase::Grounded);
}

#[test]
fn test_wall_slide_needs_intent_toward_wall() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.velocity.y = 50.0;
    let left_wall = Contacts {
        touching_left: true,
        ..Default::default()
    };

    update_jump_state(&mut actor, &left_wall, &ActorInput::new(1, false), &tuning, frame());
    assert!(!actor.is_wall_sliding);

    update_jump_state(&mut actor, &left_wall, &ActorInput::new(-1, false), &tuning, frame());
    assert!(actor.is_wall_sliding);
    assert!(actor.can_wall_jump);
    assert_eq!(actor.wall_side, WallSide::Left);
    assert_eq!(actor.phase, JumpPhase::WallSliding);
}

#[test]
fn test_wall_jump_from_left_wall_goes_right() {
    let tuning = GameTuning::default();
    let mut actor = airborne_actor(&tuning);
    actor.velocity.y = 50.0;
    actor.jump_count = 2;
    let left_wall = Contacts {
        touching_left: true,
        ..Default::default()
    };

    let kind = update_jump_state(&mut actor, &left_wall, &ActorInput::new(-1, true), &tuning, frame());
    assert_eq!(kind, Some(JumpKind::Wall { direction: 1.0 }));
    assert_eq!(actor.velocity, Vec2::new(350.0, -350.0));
    assert_eq!(actor.jump_count, 1);
    assert_eq!(actor.facing, Facing::Right);
    assert_eq!(actor.forced_horizontal_ms, tuning.wall_jump_force_ms);
}

#[test]
fn test_wall_jump_disabled_without_jumps() {
    let tuning = GameTuning {
        max_jumps: 0,
        ..Default::default()
    };
    let mut actor = airborne_actor(&tuning);
    actor.velocity.y = 50.0;
    let right_wall = Contacts {
        touching_right: true,
        ..Default::default()
    };

    let kind = update_jump_state(&mut actor, &right_wall, &ActorInput::new(1, true), &tuning, frame());
    assert_eq!(kind, None);
    assert!(actor.is_wall_sliding);
}

// ----------------------------------------------------------------------------
// Health
// ----------------------------------------------------------------------------

#[test]
fn test_health_clamps_damage() {
    let mut health = Health::new(100);
    assert_eq!(health.take_damage(30), 30);
    assert_eq!(health.percent(), 0.7);
    assert_eq!(health.take_damage(150), 70);
    assert!(health.is_dead());
    assert_eq!(health.percent(), 0.0);
}
