//! Dashboard stats endpoint

use axum::extract::State;
use axum::Json;

use sakuweb_core::{Stats, TrackerOperations};

use crate::error::ApiError;
use crate::AppState;

/// Get headline totals and savings progress (JSON API)
///
/// Recomputed from the full transaction list on every call.
pub async fn api_stats(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    let stats = state.tracker.stats().await?;
    Ok(Json(stats))
}
