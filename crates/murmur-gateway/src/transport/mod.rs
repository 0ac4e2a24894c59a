//! Transport layer (WebSocket).
//!
//! Exposes the WS upgrade handler and the codec that decodes frames once
//! into typed chat events before they reach the hub.

pub mod codec;
pub mod ws;
