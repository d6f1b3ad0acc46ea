//! # Domain Module
//!
//! Contains the analytics engine: everything that turns the transaction
//! dataset into monthly views. It operates independently of the HTTP layer
//! and of how the dataset is persisted.
//!
//! ## Module Organization
//!
//! - **month**: Month name resolution (`"march"` → 3)
//! - **filter**: Month and free-text predicates over transactions
//! - **statistics**, **price_histogram**, **category_breakdown**: The three
//!   monthly aggregations
//! - **analytics_service**: Query entry points, including the combined view
//!   that runs all three aggregations over one snapshot
//! - **import_service**: Bulk replacement of the dataset
//! - **commands**: Validated query types used by the services
//!
//! ## Business Rules
//!
//! - Month filters match the sale month in every year of the dataset
//! - The histogram always reports all ten price buckets in order
//! - Category counts only include categories present in the month
//! - A combined view never mixes data from two dataset versions
//! - Listing order is the order transactions were imported in

pub mod analytics_service;
pub mod category_breakdown;
pub mod commands;
pub mod error;
pub mod filter;
pub mod import_service;
pub mod models;
pub mod month;
pub mod price_histogram;
pub mod statistics;

pub use analytics_service::AnalyticsService;
pub use commands::listing::{ListingPage, ListingQuery};
pub use error::AnalyticsError;
pub use filter::TransactionFilter;
pub use import_service::{ImportOutcome, ImportService};
pub use month::SaleMonth;
