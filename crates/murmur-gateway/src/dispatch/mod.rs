//! Event routing.
//!
//! `EventRouter` demultiplexes typed inbound events to the chat service;
//! `hub` runs it on a single consumer task so every mutation of chat state
//! happens one at a time.

pub mod dispatcher;
pub mod hub;

pub use dispatcher::EventRouter;
pub use hub::{Command, HubHandle};
