//! Storage error types.

use thiserror::Error;

/// Errors produced by the key-value layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The backing storage location cannot be used at all. Not produced by
    /// the bundled stores; external [`crate::KvStore`] implementations use
    /// this when the host offers no durable storage.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
