//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SurfsUpError`] via `#[from]`.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum SurfsUpError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A request or value violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}
