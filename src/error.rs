//! Error types for kvlink
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for kvlink operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// Opening a store failed: unreachable host, malformed URI, refused
    /// connection or connect timeout. Never retried.
    #[error("Connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    /// An operation was attempted on a store that is no longer active.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    // -------------------------------------------------------------------------
    // Backend Errors
    // -------------------------------------------------------------------------
    /// The remote call failed after a successful connection.
    #[error("Backend operation failed: {0}")]
    BackendOperation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for KvError {
    fn from(err: redis::RedisError) -> Self {
        KvError::BackendOperation(err.to_string())
    }
}

impl KvError {
    /// Returns true if this error came from using a closed store
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, KvError::IllegalState(_))
    }
}
