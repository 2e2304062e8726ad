//! Data export endpoint

use axum::extract::State;
use axum::Json;

use sakuweb_core::{ExportReport, TrackerOperations};

use crate::error::ApiError;
use crate::AppState;

/// Export the full dataset as one JSON report (JSON API)
pub async fn api_export(State(state): State<AppState>) -> Result<Json<ExportReport>, ApiError> {
    let report = state.tracker.export().await?;
    Ok(Json(report))
}
