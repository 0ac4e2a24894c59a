//! Top-level facade crate for murmur.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use murmur_core::*;
}

pub mod gateway {
    pub use murmur_gateway::*;
}
