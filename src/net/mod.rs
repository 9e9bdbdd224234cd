//! Net domain: outbound event queue, inbound snapshots and remote actors.
//!
//! The transport itself lives outside this crate. It pushes raw JSON into
//! `NetInbox` and receives encoded messages through an `OutboundSink`.

mod messages;
mod outbox;
mod remote;

#[cfg(test)]
mod tests;

pub use messages::{InboundMessage, NetError, OutboundMessage, encode};
pub use outbox::{LogSink, NetBridge, NetInbox, NetOutbox, OutboundSink};
pub use remote::{InboundBatch, RemoteActor, route_inbound};

pub(crate) use outbox::flush_outbox;
pub(crate) use remote::apply_inbound_messages;

use bevy::prelude::*;

pub struct NetPlugin;

impl Plugin for NetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NetOutbox>()
            .init_resource::<NetInbox>()
            .init_resource::<NetBridge>();
    }
}
