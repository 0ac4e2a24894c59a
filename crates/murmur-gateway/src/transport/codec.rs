//! Decode-once codec for the transport layer.
//!
//! - Text frames => `ClientEvent` (closed set, validated here)
//! - Binary frames are rejected; the protocol is text-only
//! - Ping/Pong/Close are surfaced for lifecycle management

use axum::extract::ws::Message;
use murmur_core::{
    error::{MurmurError, Result},
    protocol::{decode_client_event, ClientEvent},
};

#[derive(Debug)]
pub enum Inbound {
    Event(ClientEvent),
    Ping(Vec<u8>),
    Pong,
    Close,
}

pub fn decode(msg: Message, max_frame_bytes: usize) -> Result<Inbound> {
    match msg {
        Message::Text(s) => {
            if s.len() > max_frame_bytes {
                return Err(MurmurError::PayloadTooLarge);
            }
            decode_client_event(&s).map(Inbound::Event)
        }
        Message::Binary(_) => Err(MurmurError::BadRequest("binary frames are not supported".into())),
        Message::Ping(v) => Ok(Inbound::Ping(v)),
        Message::Pong(_) => Ok(Inbound::Pong),
        Message::Close(_) => Ok(Inbound::Close),
    }
}
