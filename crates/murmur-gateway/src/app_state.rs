//! Shared application state for the murmur gateway.
//!
//! Holds the validated config, the transport's connection table, and the
//! submit handle of the hub that owns all chat state.

use std::sync::Arc;

use tokio::time::Duration;

use murmur_core::error::Result;

use crate::config::MurmurConfig;
use crate::dispatch::{EventRouter, HubHandle};
use crate::realtime::ConnectionTable;
use crate::services::{ChatLimits, ChatService};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: MurmurConfig,
    connections: Arc<ConnectionTable>,
    hub: HubHandle,
}

impl AppState {
    /// Build application state and spawn the hub.
    /// Must be called from inside a tokio runtime.
    pub fn new(cfg: MurmurConfig) -> Result<Self> {
        cfg.validate()?;

        let connections = Arc::new(ConnectionTable::new());
        let router = EventRouter::new(
            ChatService::new(ChatLimits::from(&cfg.chat)),
            connections.clone(),
            connections.clone(),
        );
        let (hub, _task) = HubHandle::spawn(router, Duration::from_millis(cfg.chat.reap_interval_ms));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                connections,
                hub,
            }),
        })
    }

    pub fn cfg(&self) -> &MurmurConfig {
        &self.inner.cfg
    }

    pub fn connections(&self) -> &ConnectionTable {
        &self.inner.connections
    }

    pub fn hub(&self) -> &HubHandle {
        &self.inner.hub
    }
}
