//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing a backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure (file backends).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to perform a store operation.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
