use std::fmt;

use axum::extract::ws::Message;

use murmur_core::error::Result;
use murmur_core::protocol::ServerEvent;

/// Transport-assigned connection identity. The chat core only ever uses it
/// as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnId(u64);

impl ConnId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Egress seam between the chat core and the transport.
pub trait Fanout: Send + Sync {
    /// Deliver to every currently connected connection, joined or not.
    fn broadcast(&self, event: &ServerEvent) -> Result<()>;
    /// Deliver to one connection only. Unknown connections are ignored.
    fn send_to(&self, conn: ConnId, event: &ServerEvent) -> Result<()>;
}

/// Liveness probe used by the reaper.
pub trait Liveness: Send + Sync {
    fn is_alive(&self, conn: ConnId) -> bool;
}

/// Prepared frame cached for broadcasting (serialize once, send N times).
#[derive(Debug, Clone)]
pub struct PreparedMsg(String);

impl PreparedMsg {
    pub fn prepare(event: &ServerEvent) -> Result<Self> {
        event.to_json().map(Self)
    }

    /// Convert to axum::ws::Message for transport.
    pub fn to_ws_message(&self) -> Message {
        Message::Text(self.0.clone())
    }
}
