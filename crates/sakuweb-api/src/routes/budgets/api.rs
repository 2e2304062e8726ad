//! Budgets API endpoints
//!
//! Endpoints:
//! - api_budgets: budgets for one month (JSON)
//! - api_budget_store: create or re-allocate a budget (JSON)

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use sakuweb_core::{Budget, TrackerOperations};
use sakuweb_utils::is_month_key;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BudgetsQuery {
    pub month: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetBudgetRequest {
    pub category: Option<String>,
    pub allocated: Option<f64>,
    pub month: Option<String>,
}

fn validated_month(month: Option<String>) -> Result<String, ApiError> {
    let month = month.ok_or_else(|| ApiError::BadRequest {
        message: "Month parameter is required".to_string(),
    })?;
    if !is_month_key(&month) {
        return Err(ApiError::BadRequest {
            message: "Month must be in YYYY-MM format".to_string(),
        });
    }
    Ok(month)
}

/// Get budgets for a month (JSON API)
pub async fn api_budgets(
    State(state): State<AppState>,
    Query(query): Query<BudgetsQuery>,
) -> Result<Json<Vec<Budget>>, ApiError> {
    let month = validated_month(query.month)?;
    let budgets = state.tracker.budgets(&month).await?;
    Ok(Json(budgets))
}

/// Create or re-allocate a budget (JSON API)
///
/// An existing (category, month) row only gets its allocation replaced;
/// spent is preserved.
pub async fn api_budget_store(
    State(state): State<AppState>,
    Json(payload): Json<SetBudgetRequest>,
) -> Result<(StatusCode, Json<Budget>), ApiError> {
    let category = payload
        .category
        .filter(|c| !c.is_empty())
        .ok_or_else(ApiError::missing_fields)?;
    let allocated = payload.allocated.ok_or_else(ApiError::missing_fields)?;
    let month = validated_month(payload.month)?;

    let budget = state.tracker.set_budget(&category, allocated, &month).await?;
    Ok((StatusCode::CREATED, Json(budget)))
}
