//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule violations from the engine, repository failures and worker
//! coordination problems so callers can map them to transport responses with
//! a single stable code.
use thiserror::Error;

use game_core::{GameError, RuleError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("session {0} already exists")]
    SessionExists(String),

    #[error("invalid action payload: {0}")]
    InvalidAction(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("background worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// Stable machine-readable code. Rule violations keep the engine's code.
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::Rule(error) => error.error_code(),
            RuntimeError::SessionNotFound(_) => "SESSION_NOT_FOUND",
            RuntimeError::SessionExists(_) => "SESSION_EXISTS",
            RuntimeError::InvalidAction(_) => "INVALID_ACTION",
            RuntimeError::Repository(_) => "REPOSITORY_ERROR",
            RuntimeError::WorkerJoin(_) => "WORKER_JOIN",
        }
    }

    /// The engine rule that rejected the request, if any.
    pub fn as_rule(&self) -> Option<&RuleError> {
        match self {
            RuntimeError::Rule(error) => Some(error),
            _ => None,
        }
    }
}
