//! Commerce error types.

use thiserror::Error;

/// Errors the stores can surface to callers.
///
/// The cart store has no error channel at all: every input is sanitized
/// rather than rejected, and persistence failures are swallowed at the
/// storage boundary. Only the user-products store returns these.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Failed to serialize store state for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage backend failure.
    #[error("Storage error: {0}")]
    Storage(#[from] vend_storage::StorageError),
}
