//! Net domain: wire shapes exchanged with the transport.
//!
//! JSON objects tagged by `"type"` with camelCase fields.

use serde::{Deserialize, Serialize};

use crate::hazards::{Hazard, HazardEffect};
use crate::movement::{Actor, JumpKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    #[serde(rename_all = "camelCase")]
    PlayerJump { player_id: String, x: f32, y: f32 },
    #[serde(rename_all = "camelCase")]
    PlayerDoubleJump { player_id: String, x: f32, y: f32 },
    #[serde(rename_all = "camelCase")]
    PlayerWallJump {
        player_id: String,
        x: f32,
        y: f32,
        direction: i8,
    },
    #[serde(rename_all = "camelCase")]
    TrapTriggered {
        player_id: String,
        trap_id: u32,
        trap_type: String,
        damage: i32,
    },
    #[serde(rename_all = "camelCase")]
    TrampolineBounced {
        player_id: String,
        trap_id: u32,
        x: f32,
        y: f32,
    },
    #[serde(rename_all = "camelCase")]
    PlayerRespawned { player_id: String, x: f32, y: f32 },
}

impl OutboundMessage {
    pub fn jump(player_id: &str, kind: JumpKind, actor: &Actor) -> Self {
        let player_id = player_id.to_string();
        let (x, y) = (actor.position.x, actor.position.y);
        match kind {
            JumpKind::First => Self::PlayerJump { player_id, x, y },
            JumpKind::Double => Self::PlayerDoubleJump { player_id, x, y },
            JumpKind::Wall { direction } => Self::PlayerWallJump {
                player_id,
                x,
                y,
                direction: direction.signum() as i8,
            },
        }
    }

    /// Message announcing a hazard effect, if that effect is worth sending.
    /// Hits absorbed by invincibility stay local.
    pub fn hazard(player_id: &str, hazard: &Hazard, effect: HazardEffect, actor: &Actor) -> Option<Self> {
        let player_id = player_id.to_string();
        let trap_id = hazard.id.0;
        match effect {
            HazardEffect::Damage { amount } if amount > 0 => Some(Self::TrapTriggered {
                player_id,
                trap_id,
                trap_type: hazard.kind_name().to_string(),
                damage: amount,
            }),
            HazardEffect::Damage { .. } => None,
            HazardEffect::Triggered => Some(Self::TrapTriggered {
                player_id,
                trap_id,
                trap_type: hazard.kind_name().to_string(),
                damage: 0,
            }),
            HazardEffect::Bounce => Some(Self::TrampolineBounced {
                player_id,
                trap_id,
                x: actor.position.x,
                y: actor.position.y,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Remote actor snapshot, applied verbatim.
    #[serde(rename_all = "camelCase")]
    PlayerState {
        player_id: String,
        x: f32,
        y: f32,
        #[serde(default)]
        velocity_x: f32,
        #[serde(default)]
        velocity_y: f32,
        #[serde(default)]
        animation: String,
        #[serde(default)]
        facing_left: bool,
    },
    #[serde(rename_all = "camelCase")]
    PlayerLeft { player_id: String },
    #[serde(rename_all = "camelCase")]
    BoxDestroyed { box_id: u32 },
}

#[derive(Debug)]
pub enum NetError {
    Malformed { message: String },
    Encode { message: String },
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetError::Malformed { message } => write!(f, "Malformed inbound message: {}", message),
            NetError::Encode { message } => write!(f, "Failed to encode outbound message: {}", message),
        }
    }
}

impl InboundMessage {
    pub fn parse(payload: &str) -> Result<Self, NetError> {
        serde_json::from_str(payload).map_err(|e| NetError::Malformed {
            message: e.to_string(),
        })
    }
}

pub fn encode(message: &OutboundMessage) -> Result<String, NetError> {
    serde_json::to_string(message).map_err(|e| NetError::Encode {
        message: e.to_string(),
    })
}
