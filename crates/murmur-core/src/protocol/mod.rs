//! Chat wire protocol (JSON text frames).
//!
//! Every frame is an adjacently tagged object `{"event": ..., "data": ...}`.
//! Inbound frames are decoded once at the transport boundary into the closed
//! [`ClientEvent`] set so handlers can assume well-typed input; outbound
//! events are the closed [`ServerEvent`] set.
//!
//! Decoding is panic-free: malformed input is reported as `MurmurError`.

pub mod inbound;
pub mod outbound;

pub use inbound::{decode_client_event, ClientEvent, EditReq, MessageReq};
pub use outbound::{ChatMessage, EditedMessage, Notice, ServerEvent, TypingState};
