//! Sync Errors
//!
//! Every failure the client can report. The first three variants are raised
//! before any request is sent.

use thiserror::Error;

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// Required input missing or invalid, or a zero-delta confirm
    #[error("invalid input: {0}")]
    Validation(String),

    /// Delete target name matches no loaded item
    #[error("no item named {0:?}")]
    NotFound(String),

    /// Delete target name matches more than one loaded item
    #[error("{count} items are named {name:?}")]
    Ambiguous { name: String, count: usize },

    /// The transport call itself failed
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A success body could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

impl SyncError {
    pub fn validation(msg: impl Into<String>) -> Self {
        SyncError::Validation(msg.into())
    }

    /// True when the error was raised locally, without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SyncError::Validation(_) | SyncError::NotFound(_) | SyncError::Ambiguous { .. }
        )
    }
}
