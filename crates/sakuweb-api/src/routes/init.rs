//! Seeding endpoint

use axum::extract::State;
use axum::Json;

use sakuweb_core::TrackerOperations;

use crate::error::ApiError;
use crate::AppState;

/// Seed the default savings goal, budgets, and sample data (JSON API)
///
/// Idempotent: repeated calls never duplicate the goal or any
/// (category, month) budget row.
pub async fn api_init(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let outcome = state.tracker.init().await?;
    Ok(Json(serde_json::json!({
        "message": "Data initialized successfully",
        "goalCreated": outcome.goal_created,
        "budgetsCreated": outcome.budgets_created,
        "samplesCreated": outcome.samples_created,
    })))
}
