use crate::realtime::core::{SessionRegistry, TypingSet};
use crate::realtime::types::ConnId;

/// Chat state: who is present and who is typing.
///
/// Constructed once at startup and owned by the hub; handlers and the reaper
/// borrow it mutably one at a time.
#[derive(Debug, Default)]
pub struct ChatCore {
    pub sessions: SessionRegistry,
    pub typing: TypingSet,
}

impl ChatCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a connection's identity and its typing flag.
    /// Shared by explicit disconnects and the reaper.
    pub fn evict(&mut self, conn: ConnId) -> Option<String> {
        let name = self.sessions.remove(conn)?;
        self.typing.clear(&name);
        Some(name)
    }
}
