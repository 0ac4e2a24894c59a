//! murmur gateway library entry.
//!
//! Wires the WebSocket transport, the single-consumer hub, the event router,
//! and the chat service into a runnable relay. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod ops;
pub mod realtime;
pub mod router;
pub mod services;
pub mod transport;
