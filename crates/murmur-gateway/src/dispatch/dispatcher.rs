use std::sync::Arc;

use murmur_core::error::MurmurError;
use murmur_core::protocol::{ClientEvent, ServerEvent};

use crate::realtime::{ChatCore, ConnId, Fanout, Liveness};
use crate::services::ChatService;

/// Event router: owns the chat state and feeds it one event at a time.
pub struct EventRouter {
    core: ChatCore,
    chat: ChatService,
    fanout: Arc<dyn Fanout>,
    liveness: Arc<dyn Liveness>,
}

impl EventRouter {
    pub fn new(chat: ChatService, fanout: Arc<dyn Fanout>, liveness: Arc<dyn Liveness>) -> Self {
        Self {
            core: ChatCore::new(),
            chat,
            fanout,
            liveness,
        }
    }

    pub fn core(&self) -> &ChatCore {
        &self.core
    }

    /// Handle one inbound event from `conn`. Failures are reported to the
    /// sender only and never affect other connections.
    pub fn dispatch(&mut self, conn: ConnId, event: ClientEvent) {
        let name = event.name();
        let out = self.fanout.as_ref();
        let res = match event {
            ClientEvent::Join(raw) => self.chat.on_join(&mut self.core, out, conn, &raw),
            ClientEvent::Message(req) => self.chat.on_message(&self.core, out, conn, req),
            ClientEvent::DeleteMessage(id) => self.chat.on_delete(out, conn, id),
            ClientEvent::EditMessage(req) => self.chat.on_edit(out, conn, req),
            ClientEvent::Typing(is_typing) => self.chat.on_typing(&mut self.core, out, conn, is_typing),
        };

        if let Err(e) = res {
            tracing::debug!(%conn, event = name, code = e.client_code().as_str(), error = %e, "event rejected");
            self.reject(conn, &e);
        }
    }

    /// The transport reports `conn` closed.
    pub fn disconnect(&mut self, conn: ConnId) {
        if let Err(e) = self.chat.on_disconnect(&mut self.core, self.fanout.as_ref(), conn) {
            tracing::warn!(%conn, error = %e, "disconnect broadcast failed");
        }
    }

    /// One reaper pass. Returns the number of evicted connections.
    pub fn sweep(&mut self) -> usize {
        match self
            .chat
            .on_sweep(&mut self.core, self.fanout.as_ref(), self.liveness.as_ref())
        {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "reaper broadcast failed");
                0
            }
        }
    }

    fn reject(&self, conn: ConnId, err: &MurmurError) {
        if let Err(e) = self.fanout.send_to(conn, &ServerEvent::Error(err.to_string())) {
            tracing::warn!(%conn, error = %e, "error reply failed");
        }
    }
}
