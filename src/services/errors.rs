use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Submitted payload failed validation.
    #[error("{0}")]
    Form(String),
    /// A value violated a domain constraint.
    #[error("{0}")]
    TypeConstraint(String),
    /// An optional upstream integration is not configured.
    #[error("service unavailable")]
    Unavailable,
    /// An upstream provider answered with an error.
    #[error("upstream error")]
    Upstream,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
