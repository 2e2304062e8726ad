//! Error types for sakuweb-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use sakuweb_core::{CoreError, StoreError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Service unavailable")]
    Unavailable,

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    /// Shorthand for the uniform missing-field rejection
    pub fn missing_fields() -> Self {
        ApiError::BadRequest {
            message: "Missing required fields".to_string(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CategoryNotFound { .. } => ApiError::NotFound {
                resource: "Category".to_string(),
            },
            CoreError::CategoryInUse { .. } => ApiError::BadRequest {
                message: "Cannot delete category with existing transactions".to_string(),
            },
            CoreError::Store(StoreError::Unavailable) => ApiError::Unavailable,
            CoreError::Store(store) => {
                // Uniform policy: the cause is logged, never leaked
                log::error!("store error: {}", store);
                ApiError::InternalError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            ApiError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database not available".to_string(),
            ),
            ApiError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// ==================== Tests ====================
