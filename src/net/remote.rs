//! Net domain: remote actors mirrored from inbound snapshots.

use bevy::prelude::*;

use crate::core::SessionConfig;
use crate::level::StaticGeometry;
use crate::movement::Facing;
use crate::net::messages::InboundMessage;
use crate::net::outbox::NetInbox;

/// Another player's actor. Never simulated locally; each snapshot
/// overwrites it.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RemoteActor {
    pub player_id: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub animation: String,
    pub facing: Facing,
}

/// Inbound payloads sorted by what they touch.
#[derive(Debug, Default, PartialEq)]
pub struct InboundBatch {
    /// Latest snapshot per remote player, in first-seen order.
    pub states: Vec<RemoteActor>,
    /// Players whose last message in the batch was `player_left`.
    pub left: Vec<String>,
    pub destroyed_boxes: Vec<u32>,
    pub rejected: usize,
}

pub fn route_inbound(payloads: impl IntoIterator<Item = String>, local_player: &str) -> InboundBatch {
    let mut batch = InboundBatch::default();

    for payload in payloads {
        let message = match InboundMessage::parse(&payload) {
            Ok(message) => message,
            Err(e) => {
                warn!("{}", e);
                batch.rejected += 1;
                continue;
            }
        };

        match message {
            InboundMessage::PlayerState {
                player_id,
                x,
                y,
                velocity_x,
                velocity_y,
                animation,
                facing_left,
            } => {
                if player_id == local_player {
                    continue;
                }
                let snapshot = RemoteActor {
                    player_id,
                    position: Vec2::new(x, y),
                    velocity: Vec2::new(velocity_x, velocity_y),
                    animation,
                    facing: if facing_left {
                        Facing::Left
                    } else {
                        Facing::Right
                    },
                };
                // Rejoined within the batch
                batch.left.retain(|left| *left != snapshot.player_id);
                match batch
                    .states
                    .iter_mut()
                    .find(|state| state.player_id == snapshot.player_id)
                {
                    Some(existing) => *existing = snapshot,
                    None => batch.states.push(snapshot),
                }
            }
            InboundMessage::PlayerLeft { player_id } => {
                batch.states.retain(|state| state.player_id != player_id);
                batch.left.push(player_id);
            }
            InboundMessage::BoxDestroyed { box_id } => batch.destroyed_boxes.push(box_id),
        }
    }

    batch
}

pub(crate) fn apply_inbound_messages(
    mut commands: Commands,
    mut inbox: ResMut<NetInbox>,
    session: Res<SessionConfig>,
    mut geometry: ResMut<StaticGeometry>,
    mut remotes: Query<(Entity, &mut RemoteActor)>,
) {
    if inbox.is_empty() {
        return;
    }
    let batch = route_inbound(inbox.drain(), &session.player_id);

    for state in batch.states {
        match remotes
            .iter_mut()
            .find(|(_, remote)| remote.player_id == state.player_id)
        {
            Some((_, mut remote)) => *remote = state,
            None => {
                info!("Remote player '{}' joined", state.player_id);
                commands.spawn(state);
            }
        }
    }

    for player_id in batch.left {
        for (entity, remote) in &remotes {
            if remote.player_id == player_id {
                info!("Remote player '{}' left", player_id);
                commands.entity(entity).despawn();
            }
        }
    }

    for box_id in batch.destroyed_boxes {
        if geometry.remove_box(box_id) {
            debug!("Box {} destroyed", box_id);
        } else {
            warn!("Ignoring destroy for unknown box {}", box_id);
        }
    }
}
