//! Stale-connection reaper.
//!
//! Covers transport losses that never produced a disconnect notification
//! (aborted socket task, half-open TCP). The hub calls [`sweep`] on a fixed
//! interval; it only ever removes entries.

use crate::realtime::core::ChatCore;
use crate::realtime::types::{ConnId, Liveness};

/// Evict every registry entry whose connection reports not-alive.
/// Returns the evicted `(connection, name)` pairs.
pub fn sweep(core: &mut ChatCore, liveness: &dyn Liveness) -> Vec<(ConnId, String)> {
    let mut dead: Vec<ConnId> = core
        .sessions
        .connections()
        .into_iter()
        .filter(|conn| !liveness.is_alive(*conn))
        .collect();
    dead.sort();

    dead.into_iter()
        .filter_map(|conn| core.evict(conn).map(|name| (conn, name)))
        .collect()
}
