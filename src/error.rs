//! # Connection Error Handling
//!
//! This module defines the ConnError enum, which represents the different error
//! types the fakes (and connections they wrap) can return.

use thiserror::Error;

/// Represents the different error types that can occur on a connection.
#[derive(Debug, Error)]
pub enum ConnError {
    /// The raw recorder cannot simulate reads.
    #[error("not implemented")]
    ReadNotImplemented,

    /// A recorder without an underlying connection was asked to read.
    #[error("read unsupported when no bus is connected")]
    ReadUnsupported,

    /// Playback received a transaction after its log was exhausted.
    #[error("unexpected Tx()")]
    UnexpectedTx,

    /// The write bytes differ from the expected transaction.
    #[error("unexpected write {actual:02x?} != {expected:02x?}")]
    WriteMismatch { actual: Vec<u8>, expected: Vec<u8> },

    /// The read buffer length differs from the expected transaction.
    #[error("unexpected read buffer length {actual} != {expected}")]
    ReadLengthMismatch { actual: usize, expected: usize },

    /// Playback was closed with expected transactions left over.
    #[error("playback closed with {0} unconsumed transactions")]
    Unconsumed(usize),

    /// Indicates an error from the underlying writer or trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Indicates a malformed trace document.
    #[error("Trace format error: {0}")]
    Trace(#[from] serde_json::Error),

    /// A catch‑all error for uncategorized cases.
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ConnError>;
