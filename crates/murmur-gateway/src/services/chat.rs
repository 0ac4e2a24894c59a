//! Chat broadcast pipeline: sanitize, registry lookup, fan-out.
//!
//! Handlers return `Err` only for failures the sender should hear about; the
//! router turns those into a single `error` event to that connection.
//! Everything else is either broadcast to all connections or silently
//! ignored.

use chrono::{SecondsFormat, Utc};

use murmur_core::error::{MurmurError, Result};
use murmur_core::protocol::{ChatMessage, EditReq, MessageReq, ServerEvent, TypingState};
use murmur_core::sanitize;

use crate::config::ChatSection;
use crate::realtime::{reaper, ChatCore, ConnId, Fanout, Liveness};

/// Input limits applied after sanitization (in chars).
#[derive(Debug, Clone, Copy)]
pub struct ChatLimits {
    pub max_name_chars: usize,
    pub max_text_chars: usize,
}

impl Default for ChatLimits {
    fn default() -> Self {
        Self {
            max_name_chars: 32,
            max_text_chars: 2000,
        }
    }
}

impl From<&ChatSection> for ChatLimits {
    fn from(cfg: &ChatSection) -> Self {
        Self {
            max_name_chars: cfg.max_name_chars,
            max_text_chars: cfg.max_text_chars,
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatService {
    limits: ChatLimits,
}

impl ChatService {
    pub fn new(limits: ChatLimits) -> Self {
        Self { limits }
    }

    pub fn on_join(&self, core: &mut ChatCore, out: &dyn Fanout, conn: ConnId, raw: &str) -> Result<()> {
        let name = self.display_name(raw)?;

        // A rename must not leave the old name flagged as typing.
        if let Some(prev) = core.sessions.lookup(conn) {
            if prev != name {
                let prev = prev.to_owned();
                core.typing.clear(&prev);
            }
        }

        let name = core.sessions.join(conn, &name);
        tracing::info!(%conn, username = %name, present = core.sessions.len(), "user joined");

        out.broadcast(&ServerEvent::user_joined(&name))?;
        out.broadcast(&ServerEvent::UserList(core.sessions.list_names()))
    }

    pub fn on_message(&self, core: &ChatCore, out: &dyn Fanout, conn: ConnId, req: MessageReq) -> Result<()> {
        let username = core.sessions.lookup(conn).ok_or(MurmurError::NotJoined)?;
        let text = self.message_text(&req.text)?;

        let msg = ChatMessage {
            id: req.id,
            text,
            username: username.to_owned(),
            timestamp: server_timestamp(),
            edited: req.edited,
        };
        tracing::debug!(%conn, id = %msg.id, "message");
        out.broadcast(&ServerEvent::Message(msg))
    }

    /// No ownership check: any connection may delete any message id.
    pub fn on_delete(&self, out: &dyn Fanout, conn: ConnId, id: String) -> Result<()> {
        tracing::debug!(%conn, %id, "message deleted");
        out.broadcast(&ServerEvent::MessageDeleted(id))
    }

    /// No ownership check: any connection may edit any message id.
    pub fn on_edit(&self, out: &dyn Fanout, conn: ConnId, req: EditReq) -> Result<()> {
        let text = self.message_text(&req.text)?;
        tracing::debug!(%conn, id = %req.id, "message edited");
        out.broadcast(&ServerEvent::edited(req.id, text))
    }

    pub fn on_typing(&self, core: &mut ChatCore, out: &dyn Fanout, conn: ConnId, is_typing: bool) -> Result<()> {
        let Some(name) = core.sessions.lookup(conn) else {
            tracing::debug!(%conn, "typing from unjoined connection ignored");
            return Ok(());
        };
        let username = name.to_owned();
        core.typing.set_typing(&username, is_typing);

        out.broadcast(&ServerEvent::Typing(TypingState { username, is_typing }))
    }

    pub fn on_disconnect(&self, core: &mut ChatCore, out: &dyn Fanout, conn: ConnId) -> Result<()> {
        let Some(name) = core.evict(conn) else {
            return Ok(());
        };
        tracing::info!(%conn, username = %name, present = core.sessions.len(), "user left");

        out.broadcast(&ServerEvent::user_left(&name))?;
        out.broadcast(&ServerEvent::UserList(core.sessions.list_names()))
    }

    /// Run one reaper sweep. Returns how many entries were evicted.
    pub fn on_sweep(&self, core: &mut ChatCore, out: &dyn Fanout, liveness: &dyn Liveness) -> Result<usize> {
        let evicted = reaper::sweep(core, liveness);
        if evicted.is_empty() {
            return Ok(0);
        }

        for (conn, name) in &evicted {
            tracing::info!(%conn, username = %name, "reaped stale connection");
            out.broadcast(&ServerEvent::user_left(name))?;
        }
        out.broadcast(&ServerEvent::UserList(core.sessions.list_names()))?;
        Ok(evicted.len())
    }

    /// Sanitized name, capped at `max_name_chars`. Only a blank name fails.
    fn display_name(&self, raw: &str) -> Result<String> {
        let name: String = sanitize(raw)
            .chars()
            .take(self.limits.max_name_chars)
            .collect();
        if name.trim().is_empty() {
            return Err(MurmurError::BadRequest("display name must not be empty".into()));
        }
        Ok(name)
    }

    fn message_text(&self, raw: &str) -> Result<String> {
        let text = sanitize(raw);
        if text.trim().is_empty() {
            return Err(MurmurError::BadRequest("message text must not be empty".into()));
        }
        if text.chars().count() > self.limits.max_text_chars {
            return Err(MurmurError::PayloadTooLarge);
        }
        Ok(text)
    }
}

fn server_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
