//! # Storage Module
//!
//! Handles persistence of the transaction dataset and publication of the
//! in-memory snapshots the analytics queries read from.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Keeping the last imported dataset in SQLite so a
//!   restart does not require a new import
//! - **Atomic Replacement**: A bulk import either replaces every row or none
//! - **Snapshot Publication**: Handing readers one immutable version of the
//!   dataset at a time
//! - **Seed Loading**: Reading and validating the JSON seed file
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database with SQLx
//! - **Read Path**: Queries never touch SQLite; they pin a [`TransactionSnapshot`]

pub mod connection;
pub mod seed;
pub mod snapshot;
pub mod traits;
pub mod transaction_repository;

pub use connection::DbConnection;
pub use snapshot::{SnapshotSource, SnapshotStore, TransactionSnapshot};
pub use traits::{Connection, TransactionStorage};
pub use transaction_repository::TransactionRepository;
