use thiserror::Error;

/// Failure taxonomy for all core operations.
///
/// Services and repositories return these; the HTTP boundary is the single
/// place that maps each kind to a status code and response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
