//! Budget routes - per-month listing and upsert

pub mod api;

pub use api::{api_budget_store, api_budgets};
