//! Core domain: tests for the frame clock and tuning helpers.

use super::{FrameDelta, GameTuning, SessionConfig};

#[test]
fn test_frame_delta_clamps_hitches() {
    let delta = FrameDelta::clamped(2500.0, 33.0);
    assert_eq!(delta.millis(), 33.0);
    assert!((delta.secs() - 0.033).abs() < 1e-6);
}

#[test]
fn test_frame_delta_rejects_negative_and_nan() {
    assert_eq!(FrameDelta::clamped(-5.0, 33.0).millis(), 0.0);
    assert_eq!(FrameDelta::clamped(f32::NAN, 33.0).millis(), 0.0);
    assert_eq!(FrameDelta::clamped(f32::INFINITY, 33.0).millis(), 0.0);
}

#[test]
fn test_frame_delta_passes_normal_frames() {
    assert_eq!(FrameDelta::clamped(16.0, 33.0).millis(), 16.0);
}

#[test]
fn test_scale_factor_matches_reference_frame() {
    let delta = FrameDelta::clamped(1000.0 / 60.0, 33.0);
    assert!((delta.scale_factor(0.8) - 0.8).abs() < 1e-4);

    let zero = FrameDelta::clamped(0.0, 33.0);
    assert_eq!(zero.scale_factor(0.5), 1.0);
}

#[test]
fn test_default_tuning_is_balanced() {
    let tuning = GameTuning::default();
    assert!(tuning.balance_warnings().is_empty());
    assert!(tuning.trampoline_boost > tuning.jump_speed);
    assert!(tuning.double_jump_speed < tuning.jump_speed);
}

#[test]
fn test_balance_warnings_flag_weak_trampoline() {
    let tuning = GameTuning {
        trampoline_boost: 100.0,
        ..Default::default()
    };
    let warnings = tuning.balance_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("trampoline_boost"));
}

#[test]
fn test_max_reachable_height_adds_double_jump() {
    let tuning = GameTuning::default();
    let single = tuning.apex_height(tuning.jump_speed);
    assert_eq!(single, 100.0);
    assert!(tuning.max_reachable_height() > single);
}

#[test]
fn test_session_overrides_ignore_blank_values() {
    let session = SessionConfig::default().with_overrides(Some("p7".to_string()), Some("  ".to_string()));
    assert_eq!(session.player_id, "p7");
    assert_eq!(session.level, "training_ground");
}
