//! Error types for butterfly-trip
//!
//! The tour builder itself cannot fail; every variant here belongs to the
//! boundary that decodes stops, reads input files and writes results.

use thiserror::Error;

/// Main error type for butterfly-trip operations
#[derive(Debug, Error)]
pub enum Error {
    /// Payload lacks the stop collection, a stop lacks numeric coordinates,
    /// or the coordinates are too large for a finite tour length
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// More stops than the server is configured to order in one request
    #[error("Invalid input: {count} stops exceeds the limit of {max}")]
    TooManyStops { count: usize, max: usize },

    /// File or stream I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error on the way out
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The blocking task that built the tour panicked or was cancelled
    #[error("Tour computation failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl Error {
    /// True when the caller sent something unusable (maps to a client error)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::TooManyStops { .. })
    }
}

/// Convenience result type for butterfly-trip operations
pub type Result<T> = std::result::Result<T, Error>;
