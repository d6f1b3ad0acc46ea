//! # IO Module
//!
//! Interface layer between HTTP clients and the analytics domain.
//!
//! Translates requests into domain queries, converts raw query strings into
//! validated domain types before anything is computed, maps domain results to
//! the DTOs in the `shared` crate, and maps domain errors to HTTP status codes.
//!
//! ## Supported Operations
//!
//! - **POST /api/initialize**: Replace the dataset from the seed file
//! - **GET /api/snapshot**: Describe the published dataset version
//! - **GET /api/months/:month**: Resolve a month name
//! - **GET /api/products[/:month]**: Raw transactions, optionally for one month
//! - **GET /api/transactions**: Searchable, paginated listing
//! - **GET /api/statistics/:month**, **/api/barchart/:month**,
//!   **/api/piechart/:month**, **/api/combined/:month**: Monthly analytics

pub mod rest;

pub use rest::*;
