// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised below the application layer. `Conflict` covers duplicate
/// product identities and taken usernames; `Validation` covers bad audit
/// type codes and empty required fields; `Persistence` wraps anything the
/// store reports that has no domain meaning.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
