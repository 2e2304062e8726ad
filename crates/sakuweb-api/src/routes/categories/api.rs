//! Categories API endpoints
//!
//! Endpoints:
//! - api_categories: built-in and custom categories with counts (JSON)
//! - api_category_store: create a custom category (JSON)
//! - api_category_update: rename a custom category (JSON)
//! - api_category_delete: delete an unreferenced custom category (JSON)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use sakuweb_core::{Category, CategoryWithCount, TrackerOperations};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameCategoryRequest {
    pub name: Option<String>,
}

/// Get all categories with transaction counts (JSON API)
pub async fn api_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryWithCount>>, ApiError> {
    let categories = state.tracker.categories().await?;
    Ok(Json(categories))
}

/// Create a custom category (JSON API)
pub async fn api_category_store(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryWithCount>), ApiError> {
    let name = payload
        .name
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::missing_fields)?;
    let icon = payload
        .icon
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::missing_fields)?;
    let color = payload
        .color
        .filter(|s| !s.is_empty())
        .ok_or_else(ApiError::missing_fields)?;

    let category = state.tracker.add_category(&name, &icon, &color).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename a custom category (JSON API)
pub async fn api_category_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RenameCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let name = payload
        .name
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::BadRequest {
            message: "Name is required".to_string(),
        })?;

    let category = state.tracker.rename_category(&id, &name).await?;
    Ok(Json(category))
}

/// Delete a custom category (JSON API)
///
/// Blocked with 400 while any transaction still references the category.
pub async fn api_category_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.tracker.remove_category(&id).await?;
    Ok(Json(serde_json::json!({
        "message": "Category deleted successfully"
    })))
}
