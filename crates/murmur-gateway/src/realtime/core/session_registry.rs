use std::collections::hash_map::Entry;
use std::collections::HashMap;

use murmur_core::sanitize;

use crate::realtime::types::ConnId;

#[derive(Debug, Clone)]
struct SessionEntry {
    name: String,
    created_seq: u64,
}

/// Session registry: `ConnId -> display name`.
///
/// The single authority on presence. Entries keep the order in which their
/// connection first joined; a re-join replaces the name in place.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<ConnId, SessionEntry>,
    seq: u64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize `raw_name` and bind it to `conn`. Returns the stored name.
    pub fn join(&mut self, conn: ConnId, raw_name: &str) -> String {
        let name = sanitize(raw_name);
        match self.sessions.entry(conn) {
            Entry::Occupied(mut e) => e.get_mut().name = name.clone(),
            Entry::Vacant(e) => {
                self.seq += 1;
                e.insert(SessionEntry {
                    name: name.clone(),
                    created_seq: self.seq,
                });
            }
        }
        name
    }

    pub fn lookup(&self, conn: ConnId) -> Option<&str> {
        self.sessions.get(&conn).map(|e| e.name.as_str())
    }

    pub fn remove(&mut self, conn: ConnId) -> Option<String> {
        self.sessions.remove(&conn).map(|e| e.name)
    }

    /// Display names in join order. Duplicated names appear once per connection.
    pub fn list_names(&self) -> Vec<String> {
        let mut entries: Vec<&SessionEntry> = self.sessions.values().collect();
        entries.sort_by_key(|e| e.created_seq);
        entries.into_iter().map(|e| e.name.clone()).collect()
    }

    pub fn connections(&self) -> Vec<ConnId> {
        self.sessions.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
