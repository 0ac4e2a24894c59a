//! Transport-side table of live connections.
//!
//! Socket tasks insert and remove entries while the hub fans out, so the
//! table is a `DashMap`. Delivery is lossy: a full outbound queue drops the
//! frame for that connection only and never blocks the caller.

use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Message;
use dashmap::DashMap;
use tokio::sync::mpsc::{self, error::TrySendError};

use murmur_core::error::Result;
use murmur_core::protocol::ServerEvent;

use crate::realtime::types::{ConnId, Fanout, Liveness, PreparedMsg};

/// One connection's outbound queue sender.
#[derive(Clone)]
pub struct Connection {
    pub tx: mpsc::Sender<Message>,
}

impl Connection {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self { tx }
    }
}

pub struct ConnectionTable {
    conns: DashMap<ConnId, Connection>,
    seq: AtomicU64,
    dropped: AtomicU64,
}

impl Default for ConnectionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self {
            conns: DashMap::new(),
            seq: AtomicU64::new(1),
            dropped: AtomicU64::new(0),
        }
    }

    /// Mint a fresh connection id.
    pub fn next_id(&self) -> ConnId {
        ConnId::new(self.seq.fetch_add(1, Ordering::Relaxed))
    }

    pub fn insert(&self, id: ConnId, conn: Connection) {
        self.conns.insert(id, conn);
    }

    pub fn remove(&self, id: ConnId) -> Option<Connection> {
        self.conns.remove(&id).map(|(_, conn)| conn)
    }

    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }

    /// Frames dropped because an outbound queue was full.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn deliver(&self, id: ConnId, conn: &Connection, msg: Message) {
        match conn.tx.try_send(msg) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(conn = %id, "outbound queue full, frame dropped");
            }
            // The socket task is gone; the reaper or its disconnect cleans up.
            Err(TrySendError::Closed(_)) => {}
        }
    }
}

impl Fanout for ConnectionTable {
    fn broadcast(&self, event: &ServerEvent) -> Result<()> {
        let prepared = PreparedMsg::prepare(event)?;
        for entry in self.conns.iter() {
            self.deliver(*entry.key(), entry.value(), prepared.to_ws_message());
        }
        Ok(())
    }

    fn send_to(&self, conn: ConnId, event: &ServerEvent) -> Result<()> {
        let prepared = PreparedMsg::prepare(event)?;
        if let Some(entry) = self.conns.get(&conn) {
            self.deliver(conn, entry.value(), prepared.to_ws_message());
        }
        Ok(())
    }
}

impl Liveness for ConnectionTable {
    fn is_alive(&self, conn: ConnId) -> bool {
        self.conns
            .get(&conn)
            .is_some_and(|entry| !entry.value().tx.is_closed())
    }
}
