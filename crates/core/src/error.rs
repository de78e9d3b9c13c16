//! Unified error types for Stash.
//!
//! This module provides the canonical error type for all Stash operations.
//! Note that a stored raw string failing to parse as JSON is NOT an error
//! anywhere in the system; it degrades to the raw string (see
//! [`crate::codec::decode_raw`]).

use thiserror::Error;

/// All Stash errors.
///
/// This is the canonical error type for all Stash operations. It covers the
/// ambient failure conditions of the surrounding machinery; the accessor
/// contract itself defines no faults beyond what the storage collaborator
/// produces.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid slot key (empty)
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// I/O error from a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (corrupt store image)
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage error reported by the collaborator
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for Stash operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-key error.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey(_))
    }

    /// Check if this error came from the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Io(_))
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
