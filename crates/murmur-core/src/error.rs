//! Shared error type across murmur crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Action requires a joined identity.
    NotJoined,
    /// Payload too large.
    PayloadTooLarge,
    /// Unsupported config or protocol version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotJoined => "NOT_JOINED",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MurmurError>;

/// Unified error type used by core and gateway.
///
/// The `Display` text is what a client sees in an `error` event, so keep it
/// human-readable and free of internal detail.
#[derive(Debug, Error)]
pub enum MurmurError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("join the chat before sending messages")]
    NotJoined,
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MurmurError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MurmurError::BadRequest(_) => ClientCode::BadRequest,
            MurmurError::NotJoined => ClientCode::NotJoined,
            MurmurError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            MurmurError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MurmurError::Internal(_) => ClientCode::Internal,
        }
    }
}
