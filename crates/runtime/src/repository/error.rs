//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("session repository lock was poisoned")]
    LockPoisoned,

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted record for session {0}")]
    CorruptedData(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(error: serde_json::Error) -> Self {
        RepositoryError::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
