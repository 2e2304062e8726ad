//! Error types for sakuweb-core

use sakuweb_store::StoreError;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    #[error("Cannot delete category with existing transactions")]
    CategoryInUse { id: String },
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
