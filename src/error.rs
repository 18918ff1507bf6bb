//! Error types for wirekv
//!
//! Keeps transport failures, protocol desyncs and local validation failures
//! apart. Server-reported errors are not here: they arrive as a
//! [`Response`](crate::protocol::Response) with its error flag set.

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for wirekv operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // Stream Errors
    // -------------------------------------------------------------------------
    /// The underlying stream failed, closed early, or returned a short read.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// A framing byte did not match the grammar. The stream is no longer
    /// aligned and must not be read again.
    #[error("Protocol desync (bug): {0}")]
    ProtocolDesync(String),

    // -------------------------------------------------------------------------
    // Local Validation Errors
    // -------------------------------------------------------------------------
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Argument error: {0}")]
    Argument(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection is broken by an earlier transport or protocol failure")]
    ConnectionBroken,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WireError {
    pub(crate) fn desync(msg: impl Into<String>) -> Self {
        WireError::ProtocolDesync(msg.into())
    }

    /// True for failures of the underlying stream
    pub fn is_transport(&self) -> bool {
        matches!(self, WireError::Transport(_))
    }

    /// True when the stream position no longer matches the grammar
    pub fn is_desync(&self) -> bool {
        matches!(self, WireError::ProtocolDesync(_))
    }

    /// True when the connection that produced this error is unusable
    pub fn is_fatal(&self) -> bool {
        self.is_transport() || self.is_desync()
    }
}
