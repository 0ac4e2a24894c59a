//! WebSocket handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS and mint the connection id
//! - Register the outbound queue in the connection table
//! - Decode-once, then hand typed events to the hub
//! - Lifecycle: ping/pong + idle timeout
//! - On exit: leave the connection table, then notify the hub

use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade, State},
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::Instrument;

use murmur_core::error::{MurmurError, Result};
use murmur_core::protocol::ServerEvent;

use crate::app_state::AppState;
use crate::realtime::{ConnId, Connection, PreparedMsg};
use crate::transport::codec::{decode, Inbound};

// --------------------
// Error replies (sender only)
// --------------------
fn error_frame(err: &MurmurError) -> Option<Message> {
    PreparedMsg::prepare(&ServerEvent::Error(err.to_string()))
        .ok()
        .map(|p| p.to_ws_message())
}

// --------------------
// Entry
// --------------------
pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let conn = app.connections().next_id();
    ws.on_upgrade(move |socket| {
        async move {
            if let Err(e) = run_session(app, conn, socket).await {
                tracing::debug!(error = %e, "session ended with error");
            }
        }
        .instrument(tracing::info_span!("session", %conn))
    })
}

async fn run_session(app: AppState, conn: ConnId, socket: WebSocket) -> Result<()> {
    let (out_tx, out_rx) = mpsc::channel::<Message>(app.cfg().gateway.outbound_queue);
    app.connections().insert(conn, Connection::new(out_tx.clone()));
    tracing::info!(connected = app.connections().len(), "connection opened");

    let res = pump(&app, conn, socket, out_tx, out_rx).await;

    app.connections().remove(conn);
    tracing::info!(connected = app.connections().len(), "connection closed");
    app.hub().disconnect(conn).await?;
    res
}

// --------------------
// Core session loop
// --------------------
async fn pump(
    app: &AppState,
    conn: ConnId,
    socket: WebSocket,
    out_tx: mpsc::Sender<Message>,
    mut out_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let gw = &app.cfg().gateway;
    let max_frame_bytes = gw.max_frame_bytes;
    let idle_timeout = Duration::from_millis(gw.idle_timeout_ms);

    let mut ping_tick = tokio::time::interval(Duration::from_millis(gw.ping_interval_ms));
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    ping_tick.tick().await;

    let mut last_activity = Instant::now();

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(m) => {
                        if ws_tx.send(m).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(Ok(msg)) = incoming else { break; };
                last_activity = Instant::now();

                match decode(msg, max_frame_bytes) {
                    Ok(Inbound::Event(event)) => app.hub().submit(conn, event).await?,
                    Ok(Inbound::Ping(payload)) => {
                        let _ = out_tx.try_send(Message::Pong(payload));
                    }
                    Ok(Inbound::Pong) => {}
                    Ok(Inbound::Close) => break,
                    Err(e) => {
                        tracing::debug!(code = e.client_code().as_str(), error = %e, "frame rejected");
                        if let Some(m) = error_frame(&e) {
                            let _ = out_tx.try_send(m);
                        }
                    }
                }
            }

            // heartbeat
            _ = ping_tick.tick() => {
                let _ = out_tx.try_send(Message::Ping(Vec::new()));
            }

            // idle timeout
            _ = tokio::time::sleep_until(last_activity + idle_timeout) => {
                tracing::info!("idle timeout");
                let _ = ws_tx.send(Message::Close(None)).await;
                break;
            }
        }
    }

    Ok(())
}
