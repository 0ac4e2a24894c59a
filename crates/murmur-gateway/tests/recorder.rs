//! Recording fan-out/liveness fake shared by router tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Mutex;

use murmur_core::error::Result;
use murmur_core::protocol::ServerEvent;
use murmur_gateway::realtime::{ConnId, Fanout, Liveness};

#[derive(Default)]
pub struct Recorder {
    connected: Mutex<Vec<ConnId>>,
    dead: Mutex<HashSet<ConnId>>,
    inbox: Mutex<Vec<(ConnId, ServerEvent)>>,
}

impl Recorder {
    pub fn connect(&self, raw: u64) -> ConnId {
        let id = ConnId::new(raw);
        self.connected.lock().unwrap().push(id);
        id
    }

    /// Transport closed cleanly: gone from the table.
    pub fn close(&self, id: ConnId) {
        self.connected.lock().unwrap().retain(|c| *c != id);
    }

    /// Transport lost without a disconnect notification.
    pub fn kill(&self, id: ConnId) {
        self.close(id);
        self.dead.lock().unwrap().insert(id);
    }

    /// Everything `id` received since the last drain.
    pub fn received(&self, id: ConnId) -> Vec<ServerEvent> {
        self.inbox
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == id)
            .map(|(_, ev)| ev.clone())
            .collect()
    }

    pub fn drain(&self) -> Vec<(ConnId, ServerEvent)> {
        std::mem::take(&mut *self.inbox.lock().unwrap())
    }
}

impl Fanout for Recorder {
    fn broadcast(&self, event: &ServerEvent) -> Result<()> {
        let connected = self.connected.lock().unwrap().clone();
        let mut inbox = self.inbox.lock().unwrap();
        for c in connected {
            inbox.push((c, event.clone()));
        }
        Ok(())
    }

    fn send_to(&self, conn: ConnId, event: &ServerEvent) -> Result<()> {
        if self.connected.lock().unwrap().contains(&conn) {
            self.inbox.lock().unwrap().push((conn, event.clone()));
        }
        Ok(())
    }
}

impl Liveness for Recorder {
    fn is_alive(&self, conn: ConnId) -> bool {
        !self.dead.lock().unwrap().contains(&conn)
    }
}
