//! JSON HTTP API server
//!
//! Routes are organized into modules:
//! - routes::transactions: transaction list and creation
//! - routes::budgets: monthly budget list and upsert
//! - routes::categories: built-in plus custom categories
//! - routes::stats / routes::export / routes::init: single-handler endpoints

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use sakuweb_config::Config;
use sakuweb_core::Tracker;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::budgets::{api_budget_store, api_budgets};
    use routes::categories::{
        api_categories, api_category_delete, api_category_store, api_category_update,
    };
    use routes::export::api_export;
    use routes::init::api_init;
    use routes::stats::api_stats;
    use routes::transactions::{api_transaction_store, api_transactions};

    Router::new()
        .route("/health", get(health_check))
        .route("/transactions", get(api_transactions).post(api_transaction_store))
        .route("/budgets", get(api_budgets).post(api_budget_store))
        .route("/categories", get(api_categories).post(api_category_store))
        .route(
            "/categories/:id",
            put(api_category_update).delete(api_category_delete),
        )
        .route("/stats", get(api_stats))
        .route("/export", get(api_export))
        .route("/init", post(api_init))
        // The browser UI is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Binds to the configured address and serves requests until the process
/// is stopped.
pub async fn start_server(config: Config, tracker: Arc<Tracker>) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let state = AppState { tracker, config };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting sakuweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - GET/POST /transactions");
    log::info!("  - GET/POST /budgets?month=YYYY-MM");
    log::info!("  - GET/POST /categories, PUT/DELETE /categories/:id");
    log::info!("  - GET /stats, GET /export, POST /init");

    axum::serve(listener, router).await
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sakuweb_core::Store;
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let store = Store::connect("sqlite::memory:", 1).await.unwrap();
        store.migrate().await.unwrap();
        let state = AppState {
            tracker: Arc::new(Tracker::new(store)),
            config: Config::default(),
        };
        create_router(state)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router().await;
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_router().await;
        let resp = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_transaction_missing_fields() {
        let app = test_router().await;
        let resp = app
            .oneshot(json_request("POST", "/transactions", "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_bad_type() {
        let app = test_router().await;
        let body = r#"{"type":"transfer","amount":1000,"category":"food","date":"2024-03-07"}"#;
        let resp = app
            .oneshot(json_request("POST", "/transactions", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_transaction_and_list() {
        let app = test_router().await;
        let body = r#"{"type":"expense","amount":50000,"category":"food","date":"2024-03-07","description":"Lunch"}"#;
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/transactions", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = app
            .oneshot(Request::builder().uri("/transactions").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_budgets_require_month() {
        let app = test_router().await;
        let resp = app
            .clone()
            .oneshot(Request::builder().uri("/budgets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/budgets?month=March")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/budgets?month=2024-03")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_unknown_category_is_404() {
        let app = test_router().await;
        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/categories/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_referenced_category_is_400() {
        let app = test_router().await;
        let body = r#"{"type":"expense","amount":50000,"category":"food","date":"2024-03-07"}"#;
        app.clone()
            .oneshot(json_request("POST", "/transactions", body))
            .await
            .unwrap();

        // "food" is built-in (never stored) but now referenced, so the
        // in-use check fires before the existence check
        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/categories/food")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rename_requires_name() {
        let app = test_router().await;
        let resp = app
            .oneshot(json_request("PUT", "/categories/some_id", "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_and_export_respond() {
        let app = test_router().await;
        for uri in ["/stats", "/export"] {
            let resp = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_init_endpoint() {
        let app = test_router().await;
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/init", ""))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(json_request("POST", "/init", ""))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
