//! Translation of domain errors into HTTP responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::AnalyticsError;

pub fn status_for(err: &AnalyticsError) -> StatusCode {
    match err {
        AnalyticsError::InvalidMonth(_) | AnalyticsError::InvalidPagination(_) => StatusCode::BAD_REQUEST,
        AnalyticsError::InvalidSeed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AnalyticsError::DataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        AnalyticsError::AggregationFailure { .. } | AnalyticsError::Storage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Log `err` at a level matching who is at fault and render it as a JSON body
pub fn error_response(context: &str, err: AnalyticsError) -> Response {
    if err.is_client_error() {
        warn!("{}: {}", context, err);
    } else {
        error!("{}: {}", context, err);
    }

    let body = ErrorResponse {
        error: err.kind().to_string(),
        message: err.to_string(),
    };
    (status_for(&err), Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_is_a_client_error() {
        let response = error_response("test", AnalyticsError::InvalidMonth("smarch".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_faults_map_to_server_errors() {
        assert_eq!(status_for(&AnalyticsError::DataUnavailable), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            status_for(&AnalyticsError::AggregationFailure {
                aggregation: "category",
                reason: "panicked".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&AnalyticsError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
