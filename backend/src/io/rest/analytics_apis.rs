//! # REST API for Monthly Analytics
//!
//! Month names arrive as path segments and are resolved before any
//! aggregation runs, so an unknown month is always a 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::MonthResolution;
use tracing::info;

use super::errors::error_response;
use super::mappers::transaction_mapper::TransactionMapper;
use crate::domain::SaleMonth;
use crate::AppState;

/// GET /api/months/:month - Resolve a month name to its number
pub async fn resolve_month(Path(month): Path<String>) -> impl IntoResponse {
    info!("GET /api/months/{}", month);

    match SaleMonth::from_name(&month) {
        Ok(resolved) => {
            let body = MonthResolution {
                month: resolved.name().to_string(),
                number: resolved.number(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response("Failed to resolve month", e),
    }
}

/// GET /api/products/:month - Transactions sold in a month of any year
pub async fn list_products_for_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/products/{}", month);

    let result = SaleMonth::from_name(&month)
        .and_then(|month| state.analytics_service.transactions_for_month(month));

    match result {
        Ok(transactions) => {
            let body: Vec<shared::Transaction> =
                transactions.into_iter().map(TransactionMapper::to_dto).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response("Failed to fetch products for month", e),
    }
}

/// GET /api/statistics/:month - Sales totals for a month
pub async fn get_statistics(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/statistics/{}", month);

    let result = SaleMonth::from_name(&month).and_then(|month| state.analytics_service.statistics(month));

    match result {
        Ok(statistics) => (StatusCode::OK, Json(statistics)).into_response(),
        Err(e) => error_response("Failed to fetch statistics", e),
    }
}

/// GET /api/barchart/:month - Price histogram for a month
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/barchart/{}", month);

    let result =
        SaleMonth::from_name(&month).and_then(|month| state.analytics_service.price_histogram(month));

    match result {
        Ok(bars) => (StatusCode::OK, Json(bars)).into_response(),
        Err(e) => error_response("Failed to fetch bar chart data", e),
    }
}

/// GET /api/piechart/:month - Item counts per category for a month
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/piechart/{}", month);

    let result =
        SaleMonth::from_name(&month).and_then(|month| state.analytics_service.category_breakdown(month));

    match result {
        Ok(slices) => (StatusCode::OK, Json(slices)).into_response(),
        Err(e) => error_response("Failed to fetch pie chart data", e),
    }
}

/// GET /api/combined/:month - Statistics, bar chart and pie chart from one snapshot
pub async fn get_combined_view(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/combined/{}", month);

    let month = match SaleMonth::from_name(&month) {
        Ok(month) => month,
        Err(e) => return error_response("Failed to fetch combined data", e),
    };

    match state.analytics_service.combined_view(month).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => error_response("Failed to fetch combined data", e),
    }
}
