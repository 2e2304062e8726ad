//! Route modules for the API server
//!
//! All routes are organized into modules:
//! - transactions: transaction list and creation (with budget sync)
//! - budgets: monthly budget list and upsert
//! - categories: built-in plus custom categories
//! - stats: dashboard aggregation
//! - export: full data export
//! - init: idempotent seeding
//!
//! Resource modules follow a consistent structure (mod.rs + api.rs);
//! single-handler endpoints live in flat files.

pub mod budgets;
pub mod categories;
pub mod export;
pub mod init;
pub mod stats;
pub mod transactions;
