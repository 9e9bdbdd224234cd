use bevy::math::{Rect, Vec2};

use super::*;
use crate::core::GameTuning;
use crate::hazards::{Hazard, HazardEffect, HazardId, HazardKind};
use crate::movement::{Actor, Facing, JumpKind};

struct RecordingSink(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

impl OutboundSink for RecordingSink {
    fn send(&mut self, payload: String) {
        if let Ok(mut sent) = self.0.lock() {
            sent.push(payload);
        }
    }
}

fn actor_at(x: f32, y: f32) -> Actor {
    Actor::spawn(Vec2::new(x, y), &GameTuning::default())
}

fn spike(id: u32) -> Hazard {
    Hazard::new(
        HazardId(id),
        Rect::new(0.0, 0.0, 32.0, 16.0),
        HazardKind::Spike,
    )
}

#[test]
fn test_jump_messages_use_snake_case_type_and_camel_case_fields() {
    let actor = actor_at(10.0, 20.0);
    let json = encode(&OutboundMessage::jump("p1", JumpKind::First, &actor)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "player_jump");
    assert_eq!(value["playerId"], "p1");
    assert_eq!(value["x"], 10.0);

    let wall = OutboundMessage::jump("p1", JumpKind::Wall { direction: -1.0 }, &actor);
    let value: serde_json::Value = serde_json::from_str(&encode(&wall).unwrap()).unwrap();
    assert_eq!(value["type"], "player_wall_jump");
    assert_eq!(value["direction"], -1);
}

#[test]
fn test_damage_hit_becomes_trap_triggered() {
    let actor = actor_at(0.0, 0.0);
    let message = OutboundMessage::hazard("p1", &spike(4), HazardEffect::Damage { amount: 20 }, &actor);
    let json = encode(&message.unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "trap_triggered");
    assert_eq!(value["trapId"], 4);
    assert_eq!(value["trapType"], "spike");
    assert_eq!(value["damage"], 20);
}

#[test]
fn test_absorbed_hit_is_not_sent() {
    let actor = actor_at(0.0, 0.0);
    let message = OutboundMessage::hazard("p1", &spike(4), HazardEffect::Damage { amount: 0 }, &actor);
    assert!(message.is_none());
}

#[test]
fn test_bounce_becomes_trampoline_bounced() {
    let actor = actor_at(5.0, 6.0);
    let message = OutboundMessage::hazard("p1", &spike(2), HazardEffect::Bounce, &actor);
    assert_eq!(
        message,
        Some(OutboundMessage::TrampolineBounced {
            player_id: "p1".to_string(),
            trap_id: 2,
            x: 5.0,
            y: 6.0,
        })
    );
}

#[test]
fn test_parse_player_state_with_missing_optional_fields() {
    let message = InboundMessage::parse(r#"{"type":"player_state","playerId":"p2","x":1.5,"y":-3.0}"#).unwrap();
    assert_eq!(
        message,
        InboundMessage::PlayerState {
            player_id: "p2".to_string(),
            x: 1.5,
            y: -3.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            animation: String::new(),
            facing_left: false,
        }
    );
}

#[test]
fn test_parse_rejects_unknown_type() {
    let result = InboundMessage::parse(r#"{"type":"teleport","playerId":"p2"}"#);
    assert!(matches!(result, Err(NetError::Malformed { .. })));
}

#[test]
fn test_route_keeps_latest_state_and_skips_local_player() {
    let payloads = vec![
        r#"{"type":"player_state","playerId":"p2","x":1.0,"y":1.0}"#.to_string(),
        r#"{"type":"player_state","playerId":"local","x":9.0,"y":9.0}"#.to_string(),
        r#"{"type":"player_state","playerId":"p2","x":2.0,"y":3.0,"facingLeft":true}"#.to_string(),
        "not json".to_string(),
        r#"{"type":"box_destroyed","boxId":6}"#.to_string(),
    ];
    let batch = route_inbound(payloads, "local");

    assert_eq!(batch.states.len(), 1);
    assert_eq!(batch.states[0].position, Vec2::new(2.0, 3.0));
    assert_eq!(batch.states[0].facing, Facing::Left);
    assert_eq!(batch.destroyed_boxes, vec![6]);
    assert_eq!(batch.rejected, 1);
}

#[test]
fn test_route_player_left_drops_pending_state() {
    let payloads = vec![
        r#"{"type":"player_state","playerId":"p3","x":0.0,"y":0.0}"#.to_string(),
        r#"{"type":"player_left","playerId":"p3"}"#.to_string(),
    ];
    let batch = route_inbound(payloads, "local");
    assert!(batch.states.is_empty());
    assert_eq!(batch.left, vec!["p3".to_string()]);
}

#[test]
fn test_route_rejoin_after_leave_keeps_player() {
    let payloads = vec![
        r#"{"type":"player_left","playerId":"p3"}"#.to_string(),
        r#"{"type":"player_state","playerId":"p3","x":4.0,"y":5.0}"#.to_string(),
        r#"{"type":"player_left","playerId":"p4"}"#.to_string(),
    ];
    let batch = route_inbound(payloads, "local");

    assert_eq!(batch.states.len(), 1);
    assert_eq!(batch.states[0].player_id, "p3");
    assert_eq!(batch.states[0].position, Vec2::new(4.0, 5.0));
    assert_eq!(batch.left, vec!["p4".to_string()]);
}

#[test]
fn test_bridge_flush_sends_everything_and_empties_outbox() {
    let sent = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let mut bridge = NetBridge::new(RecordingSink(sent.clone()));
    let mut outbox = NetOutbox::default();
    let actor = actor_at(0.0, 0.0);
    outbox.extend([
        OutboundMessage::jump("p1", JumpKind::First, &actor),
        OutboundMessage::jump("p1", JumpKind::Double, &actor),
    ]);

    assert_eq!(bridge.flush(&mut outbox), 2);
    assert!(outbox.is_empty());
    let sent = sent.lock().unwrap();
    assert!(sent[0].contains("\"player_jump\""));
    assert!(sent[1].contains("\"player_double_jump\""));
}
