//! Events sent to clients.

use serde::{Deserialize, Serialize};

use crate::error::{MurmurError, Result};

/// Outbound event (one per text frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Message(ChatMessage),
    MessageDeleted(String),
    MessageEdited(EditedMessage),
    UserJoined(Notice),
    UserLeft(Notice),
    UserList(Vec<String>),
    Typing(TypingState),
    Error(String),
}

/// A broadcast chat message. `timestamp` is always server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub username: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditedMessage {
    pub id: String,
    pub text: String,
    pub edited: bool,
}

/// Presence notice carried by `userJoined` / `userLeft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub username: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingState {
    pub username: String,
    #[serde(rename = "isTyping")]
    pub is_typing: bool,
}

impl ServerEvent {
    pub fn user_joined(username: &str) -> Self {
        ServerEvent::UserJoined(Notice {
            username: username.to_owned(),
            message: format!("{username} joined the chat"),
        })
    }

    pub fn user_left(username: &str) -> Self {
        ServerEvent::UserLeft(Notice {
            username: username.to_owned(),
            message: format!("{username} left the chat"),
        })
    }

    pub fn edited(id: String, text: String) -> Self {
        ServerEvent::MessageEdited(EditedMessage {
            id,
            text,
            edited: true,
        })
    }

    /// Event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Message(_) => "message",
            ServerEvent::MessageDeleted(_) => "messageDeleted",
            ServerEvent::MessageEdited(_) => "messageEdited",
            ServerEvent::UserJoined(_) => "userJoined",
            ServerEvent::UserLeft(_) => "userLeft",
            ServerEvent::UserList(_) => "userList",
            ServerEvent::Typing(_) => "typing",
            ServerEvent::Error(_) => "error",
        }
    }

    /// Serialize to a JSON text frame.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| MurmurError::Internal(format!("json encode failed: {e}")))
    }
}
