//! Error types for sakuweb-store

use thiserror::Error;

/// Storage error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store is unavailable")]
    Unavailable,

    #[error("Migration failed: {0}")]
    Migration(sqlx::Error),

    #[error("Query failed: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                StoreError::Unavailable
            }
            other => StoreError::Query(other),
        }
    }
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
