//! # REST API for Dataset Administration
//!
//! Seed import and snapshot inspection.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::InitializeResponse;
use tracing::info;

use super::errors::error_response;
use crate::AppState;

/// POST /api/initialize - Replace the dataset with the configured seed file
pub async fn initialize_database(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/initialize");

    match state.import_service.initialize().await {
        Ok(outcome) => {
            let body = InitializeResponse {
                inserted: outcome.inserted,
                version: outcome.version,
                success_message: format!("Database initialized with {} transactions", outcome.inserted),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response("Failed to initialize database", e),
    }
}

/// GET /api/snapshot - Version and size of the published dataset
pub async fn get_snapshot_info(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/snapshot");

    match state.analytics_service.snapshot_info() {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => error_response("Failed to describe snapshot", e),
    }
}
