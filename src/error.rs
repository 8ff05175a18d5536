//! Error types for acplink
//!
//! Provides a unified error type for codec and handshake operations.

use thiserror::Error;

use crate::protocol::FieldKind;

/// Result type alias using AcpError
pub type Result<T> = std::result::Result<T, AcpError>;

/// Unified error type for acplink operations
#[derive(Debug, Error)]
pub enum AcpError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {kind} field ({len} bytes): {source}")]
    FieldIo {
        kind: FieldKind,
        len: usize,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("String too long to encode: {len} bytes (max {max})")]
    StringTooLong { len: usize, max: usize },

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Handshake Errors
    // -------------------------------------------------------------------------
    #[error("Name mismatch: expected {expected:?}, peer sent {actual:?}")]
    NameMismatch { expected: String, actual: String },

    #[error("Protocol version {proposed} out of range [{min}, {max}]")]
    ProtocolOutOfRange { proposed: u16, min: u16, max: u16 },

    #[error("Invalid handshake state: {0}")]
    InvalidState(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AcpError {
    /// Wrap an I/O error raised while reading or writing a specific field
    pub(crate) fn field(kind: FieldKind, len: usize, source: std::io::Error) -> Self {
        AcpError::FieldIo { kind, len, source }
    }

    /// True for any stream-level failure, including premature end of input
    pub fn is_io(&self) -> bool {
        matches!(self, AcpError::Io(_) | AcpError::FieldIo { .. })
    }

    /// True when the peer closed the stream before a field was complete
    pub fn is_eof(&self) -> bool {
        match self {
            AcpError::Io(e) | AcpError::FieldIo { source: e, .. } => {
                e.kind() == std::io::ErrorKind::UnexpectedEof
            }
            _ => false,
        }
    }
}
