//! Errors surfaced by the analytics domain.

/// Everything that can go wrong while answering an analytics query or
/// importing seed data.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("'{0}' is not a recognized month name")]
    InvalidMonth(String),
    #[error("invalid pagination parameters: {0}")]
    InvalidPagination(String),
    /// No transaction store is attached to the service. An empty store is
    /// not an error and produces zero-valued results instead.
    #[error("transaction data is not available")]
    DataUnavailable,
    #[error("{aggregation} aggregation failed: {reason}")]
    AggregationFailure {
        aggregation: &'static str,
        reason: String,
    },
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
    #[error("storage failure: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl AnalyticsError {
    /// Stable machine-readable name for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidMonth(_) => "invalid_month",
            AnalyticsError::InvalidPagination(_) => "invalid_pagination",
            AnalyticsError::DataUnavailable => "data_unavailable",
            AnalyticsError::AggregationFailure { .. } => "aggregation_failure",
            AnalyticsError::InvalidSeed(_) => "invalid_seed",
            AnalyticsError::Storage(_) => "storage_failure",
        }
    }

    /// True for errors caused by the caller's input rather than a fault on our side
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InvalidMonth(_)
                | AnalyticsError::InvalidPagination(_)
                | AnalyticsError::InvalidSeed(_)
        )
    }
}
