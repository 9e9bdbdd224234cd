//! Net domain: queues between the simulation and the transport.

use bevy::prelude::*;

use crate::net::messages::{OutboundMessage, encode};

/// Messages produced during the current tick, drained after it completes.
#[derive(Resource, Debug, Default)]
pub struct NetOutbox {
    pending: Vec<OutboundMessage>,
}

impl NetOutbox {
    pub fn extend(&mut self, messages: impl IntoIterator<Item = OutboundMessage>) {
        self.pending.extend(messages);
    }

    pub fn drain(&mut self) -> Vec<OutboundMessage> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Raw payloads from the transport, applied at the start of the next tick.
#[derive(Resource, Debug, Default)]
pub struct NetInbox {
    pending: Vec<String>,
}

impl NetInbox {
    pub fn push(&mut self, payload: impl Into<String>) {
        self.pending.push(payload.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Transport hand-off. Implementations must not block the tick.
pub trait OutboundSink: Send + Sync {
    fn send(&mut self, payload: String);
}

/// Default sink when no transport is attached.
pub struct LogSink;

impl OutboundSink for LogSink {
    fn send(&mut self, payload: String) {
        debug!("outbound {}", payload);
    }
}

#[derive(Resource)]
pub struct NetBridge {
    sink: Box<dyn OutboundSink>,
}

impl NetBridge {
    pub fn new(sink: impl OutboundSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Encodes and sends everything queued; returns how many were sent.
    pub fn flush(&mut self, outbox: &mut NetOutbox) -> usize {
        let mut sent = 0;
        for message in outbox.drain() {
            match encode(&message) {
                Ok(payload) => {
                    self.sink.send(payload);
                    sent += 1;
                }
                Err(e) => warn!("{}", e),
            }
        }
        sent
    }
}

impl Default for NetBridge {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

pub(crate) fn flush_outbox(mut outbox: ResMut<NetOutbox>, mut bridge: ResMut<NetBridge>) {
    if outbox.is_empty() {
        return;
    }
    let sent = bridge.flush(&mut outbox);
    debug!("Flushed {} outbound messages", sent);
}
