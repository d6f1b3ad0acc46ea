//! # Sales Analytics Backend
//!
//! Month-based analytics over a dataset of product sales: statistics, a
//! price histogram, a category breakdown, and a searchable listing.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (filters, aggregations, services)
//!     ↓
//! Storage Layer (SQLite persistence, published snapshots)
//! ```
//!
//! Queries read an immutable snapshot of the dataset. Imports persist the
//! new dataset first and only then publish it, so readers never see a
//! partially imported state.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AnalyticsService, ImportService};
use crate::storage::{DbConnection, SnapshotStore};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: AnalyticsService,
    pub import_service: ImportService<DbConnection>,
}

impl AppState {
    /// Wire both services to one connection and one snapshot store
    pub fn new(connection: Arc<DbConnection>, store: Arc<SnapshotStore>, config: &AppConfig) -> Self {
        let analytics_service = AnalyticsService::new(store.clone());
        let import_service = ImportService::new(connection, store, config.seed_path.clone());
        Self {
            analytics_service,
            import_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let connection = Arc::new(DbConnection::new(&config.database_url).await?);

    info!("Setting up domain model");
    let store = Arc::new(SnapshotStore::new());
    let app_state = AppState::new(connection, store, config);

    app_state.import_service.restore().await?;

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/initialize", post(io::initialize_database))
        .route("/snapshot", get(io::get_snapshot_info))
        .route("/months/:month", get(io::resolve_month))
        .route("/products", get(io::list_all_products))
        .route("/products/:month", get(io::list_products_for_month))
        .route("/transactions", get(io::list_transactions))
        .route("/statistics/:month", get(io::get_statistics))
        .route("/barchart/:month", get(io::get_bar_chart))
        .route("/piechart/:month", get(io::get_pie_chart))
        .route("/combined/:month", get(io::get_combined_view));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::test_support::sample_store;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn create_test_router() -> Router {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let connection = Arc::new(DbConnection::in_memory().await.unwrap());
        let state = AppState::new(connection, Arc::new(SnapshotStore::new()), &config);
        state.import_service.import(sample_store()).await.unwrap();
        create_router(state, config.cors_origin)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_statistics_route() {
        let (status, body) = get_json(create_test_router().await, "/api/statistics/january").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSalesAmount"], 200.0);
        assert_eq!(body["totalSoldItems"], 1);
        assert_eq!(body["totalNotSoldItems"], 1);
    }

    #[tokio::test]
    async fn test_unknown_month_is_bad_request() {
        let (status, body) = get_json(create_test_router().await, "/api/piechart/jan").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_month");
    }

    #[tokio::test]
    async fn test_month_resolution_route() {
        let (status, body) = get_json(create_test_router().await, "/api/months/MARCH").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["month"], "march");
        assert_eq!(body["number"], 3);
    }

    #[tokio::test]
    async fn test_listing_rejects_zero_per_page() {
        let (status, body) = get_json(create_test_router().await, "/api/transactions?perPage=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_pagination");
    }

    #[tokio::test]
    async fn test_listing_defaults() {
        let (status, body) = get_json(create_test_router().await, "/api/transactions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["page"], 1);
        assert_eq!(body["perPage"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_snapshot_route_reports_version() {
        let (status, body) = get_json(create_test_router().await, "/api/snapshot").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], 1);
        assert_eq!(body["transactionCount"], 3);
    }
}
