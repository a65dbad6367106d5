use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// Schema migrations could not be applied.
    #[error("migration error: {0}")]
    Migration(String),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
