//! Realtime runtime for the murmur gateway.
//!
//! Chat state (session registry, typing set, reaper) plus the egress side:
//! the transport's connection table and the serialize-once fan-out helpers.

pub mod connections;
pub mod core;
pub mod types;

pub use connections::{Connection, ConnectionTable};
pub use self::core::{reaper, ChatCore, SessionRegistry, TypingSet};
pub use types::{ConnId, Fanout, Liveness, PreparedMsg};
