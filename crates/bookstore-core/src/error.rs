//! Domain-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Application failure raised by a service. The message is shown to clients
/// verbatim inside an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppException {
    message: String,
}

impl AppException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything a service call can fail with.
///
/// Only [`ServiceError::App`] is turned into an error envelope by the HTTP
/// layer; the other variants surface as unhandled server errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    App(#[from] AppException),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
