//! Transaction routes - list and creation
//!
//! Creating an expense also runs budget synchronization for the
//! transaction's category-month.

pub mod api;

pub use api::{api_transaction_store, api_transactions};
