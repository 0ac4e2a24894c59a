//! Chat state owned by the hub.
//!
//! Session registry, typing set, and the reaper sweep. Everything here is
//! plain single-owner data: the hub serializes access, so no locks.

pub mod reaper;
mod realtime;
mod session_registry;
mod typing;

pub use realtime::ChatCore;
pub use session_registry::SessionRegistry;
pub use typing::TypingSet;
