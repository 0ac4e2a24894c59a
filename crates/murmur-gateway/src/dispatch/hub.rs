//! Single-consumer hub task.
//!
//! Socket tasks submit commands over one mpsc channel; the hub applies them
//! in arrival order and interleaves reaper sweeps from its own interval, so
//! a sweep and a handler never run at the same time.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, MissedTickBehavior};

use murmur_core::error::{MurmurError, Result};
use murmur_core::protocol::ClientEvent;

use crate::dispatch::EventRouter;
use crate::realtime::ConnId;

const HUB_QUEUE: usize = 4096;

#[derive(Debug)]
pub enum Command {
    Event { conn: ConnId, event: ClientEvent },
    Disconnect { conn: ConnId },
}

/// Cloneable submit side of the hub.
#[derive(Clone)]
pub struct HubHandle {
    tx: mpsc::Sender<Command>,
}

impl HubHandle {
    /// Spawn the hub on the current tokio runtime.
    pub fn spawn(router: EventRouter, reap_every: Duration) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(HUB_QUEUE);
        let task = tokio::spawn(run(router, rx, reap_every));
        (Self { tx }, task)
    }

    pub async fn submit(&self, conn: ConnId, event: ClientEvent) -> Result<()> {
        self.send(Command::Event { conn, event }).await
    }

    pub async fn disconnect(&self, conn: ConnId) -> Result<()> {
        self.send(Command::Disconnect { conn }).await
    }

    async fn send(&self, cmd: Command) -> Result<()> {
        self.tx
            .send(cmd)
            .await
            .map_err(|_| MurmurError::Internal("hub stopped".into()))
    }
}

async fn run(mut router: EventRouter, mut rx: mpsc::Receiver<Command>, reap_every: Duration) {
    let mut reap_tick = time::interval(reap_every);
    reap_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; sweeps start one interval in.
    reap_tick.tick().await;

    tracing::info!(?reap_every, "hub started");

    loop {
        tokio::select! {
            cmd = rx.recv() => {
                match cmd {
                    Some(Command::Event { conn, event }) => router.dispatch(conn, event),
                    Some(Command::Disconnect { conn }) => router.disconnect(conn),
                    None => break,
                }
            }

            _ = reap_tick.tick() => {
                let evicted = router.sweep();
                if evicted > 0 {
                    tracing::info!(evicted, present = router.core().sessions.len(), "reaper sweep");
                }
            }
        }
    }

    tracing::info!("hub stopped");
}
