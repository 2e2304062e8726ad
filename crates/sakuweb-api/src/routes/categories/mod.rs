//! Category routes - built-in set plus custom CRUD

pub mod api;

pub use api::{api_categories, api_category_delete, api_category_store, api_category_update};
