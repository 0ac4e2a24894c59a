//! murmur core: transport-agnostic chat protocol, error types, and sanitizer.
//!
//! This crate defines the wire-level event contracts and error surface shared
//! by the gateway and its tests. It carries no transport or runtime
//! dependencies so the chat pipeline can be exercised without a socket.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MurmurError`/`Result` so a malformed
//! frame never takes the relay down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod sanitize;

/// Shared result type.
pub use error::{MurmurError, Result};
pub use sanitize::sanitize;
