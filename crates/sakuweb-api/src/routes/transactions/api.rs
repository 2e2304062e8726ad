//! Transactions API endpoints
//!
//! Endpoints:
//! - api_transactions: full transaction list, newest first (JSON)
//! - api_transaction_store: record a transaction (JSON)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use sakuweb_core::{NewTransaction, Transaction, TrackerOperations, TransactionKind};

use crate::error::ApiError;
use crate::AppState;

/// Request body for creating a transaction. Fields arrive optional so the
/// handler can answer missing ones with 400 instead of a decode rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl CreateTransactionRequest {
    fn into_new_transaction(self) -> Result<NewTransaction, ApiError> {
        let kind = self
            .kind
            .as_deref()
            .ok_or_else(ApiError::missing_fields)?
            .parse::<TransactionKind>()
            .map_err(|message| ApiError::BadRequest { message })?;
        let amount = self.amount.ok_or_else(ApiError::missing_fields)?;
        if amount <= 0.0 {
            return Err(ApiError::BadRequest {
                message: "Amount must be positive".to_string(),
            });
        }
        let category = self
            .category
            .filter(|c| !c.is_empty())
            .ok_or_else(ApiError::missing_fields)?;
        let date = self.date.ok_or_else(ApiError::missing_fields)?;

        Ok(NewTransaction {
            kind,
            amount,
            category,
            description: self.description,
            date,
        })
    }
}

/// Get all transactions (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.tracker.transactions().await?;
    Ok(Json(transactions))
}

/// Record a transaction (JSON API)
///
/// Expenses additionally update the matching monthly budget: the row is
/// created from the default allocation table when absent, then its spent
/// amount is incremented.
pub async fn api_transaction_store(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let new = payload.into_new_transaction()?;
    let transaction = state.tracker.add_transaction(new).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
