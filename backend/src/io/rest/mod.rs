//! # REST API Interface Layer
//!
//! Axum handlers for the analytics API, grouped by resource.
//!
//! - **Error Handling**: Domain errors become JSON error bodies with a 4xx
//!   status for bad input and 5xx for faults
//! - **Request Logging**: Every handler logs the request it serves

pub mod admin_apis;
pub mod analytics_apis;
pub mod errors;
pub mod mappers;
pub mod transaction_apis;

pub use admin_apis::*;
pub use analytics_apis::*;
pub use transaction_apis::*;
