use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single product sale as exchanged over the API and in seed files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    /// Sale price, never negative
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Product image URL, passed through untouched
    pub image: String,
    pub sold: bool,
    /// Timestamp of the sale (RFC 3339 on the wire)
    pub date_of_sale: DateTime<Utc>,
}

/// Aggregate sales figures for one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Sum of `price` over every transaction in the month, sold or not
    pub total_sales_amount: f64,
    pub total_sold_items: usize,
    pub total_not_sold_items: usize,
}

/// One bar of the price histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    /// Bucket label such as `"101-200"` or `"901-above"`
    pub range: String,
    pub count: usize,
}

/// One slice of the category pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub item_count: usize,
}

/// Statistics, histogram and category breakdown computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedView {
    pub statistics: StatisticsSummary,
    pub bar_chart: Vec<PriceRangeCount>,
    pub pie_chart: Vec<CategoryCount>,
}

/// One page of the searchable transaction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    /// Number of transactions matching the query across all pages
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    pub items: Vec<Transaction>,
}

/// Result of resolving a month name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResolution {
    /// Canonical lowercase month name
    pub month: String,
    /// Calendar month number, 1 to 12
    pub number: u32,
}

/// Describes the currently published dataset snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub version: u64,
    pub transaction_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Response after (re)initializing the dataset from seed data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    pub inserted: usize,
    pub version: u64,
    pub success_message: String,
}

/// Body returned with every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind, e.g. `"invalid_month"`
    pub error: String,
    pub message: String,
}
