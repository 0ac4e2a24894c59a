//! Events sent by clients.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{MurmurError, Result};

/// Inbound event (one per text frame).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Announce a display name (raw, unsanitized).
    Join(String),
    /// Post a new message.
    Message(MessageReq),
    /// Delete a message by id.
    DeleteMessage(String),
    /// Replace the text of a message by id.
    EditMessage(EditReq),
    /// Typing started (`true`) or stopped (`false`).
    Typing(bool),
}

impl ClientEvent {
    /// Event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::Join(_) => "join",
            ClientEvent::Message(_) => "message",
            ClientEvent::DeleteMessage(_) => "deleteMessage",
            ClientEvent::EditMessage(_) => "editMessage",
            ClientEvent::Typing(_) => "typing",
        }
    }
}

/// Payload of `message`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageReq {
    /// Client-assigned id, assumed unique.
    pub id: String,
    pub text: String,
    /// Client clock. Accepted for compatibility, never rebroadcast.
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub edited: Option<bool>,
}

/// Payload of `editMessage`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditReq {
    pub id: String,
    pub text: String,
}

/// Decode one text frame into a [`ClientEvent`].
pub fn decode_client_event(s: &str) -> Result<ClientEvent> {
    serde_json::from_str(s).map_err(|e| MurmurError::BadRequest(format!("invalid event: {e}")))
}
