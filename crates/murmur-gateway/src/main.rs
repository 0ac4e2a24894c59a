//! murmur gateway
//!
//! - WebSocket endpoint: /ws
//! - Liveness: /healthz
//! - Config: first CLI argument, or ./murmur.yaml

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use murmur_core::error::{MurmurError, Result};
use murmur_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "murmur.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .map_err(|e| MurmurError::BadRequest(format!("gateway.listen must be a valid SocketAddr: {e}")))?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "murmur-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MurmurError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MurmurError::Internal(format!("server failed: {e}")))
}
