//! # REST API for Transactions
//!
//! Endpoints for the raw dataset and the searchable, paginated listing.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use super::errors::error_response;
use super::mappers::transaction_mapper::TransactionMapper;
use crate::domain::ListingQuery;
use crate::AppState;

/// Raw query parameters for the listing. Everything arrives as text and is
/// validated into a [`ListingQuery`] before the listing runs.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListParams {
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub month: Option<String>,
}

/// GET /api/transactions - Search and paginate transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListParams>,
) -> impl IntoResponse {
    info!("GET /api/transactions - query: {:?}", params);

    let query = match ListingQuery::from_params(
        params.search.as_deref(),
        params.page.as_deref(),
        params.per_page.as_deref(),
        params.month.as_deref(),
    ) {
        Ok(query) => query,
        Err(e) => return error_response("Rejected transaction listing", e),
    };

    match state.analytics_service.list_transactions(&query) {
        Ok(page) => (StatusCode::OK, Json(TransactionMapper::to_list_response(page))).into_response(),
        Err(e) => error_response("Failed to list transactions", e),
    }
}

/// GET /api/products - Every transaction in store order
pub async fn list_all_products(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/products");

    match state.analytics_service.all_transactions() {
        Ok(transactions) => {
            let body: Vec<shared::Transaction> =
                transactions.into_iter().map(TransactionMapper::to_dto).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response("Failed to fetch products", e),
    }
}
