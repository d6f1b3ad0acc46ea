//! # Storage Traits
//!
//! Abstractions the domain layer uses to persist and reload the dataset
//! without knowing which backend holds it.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Transaction;

/// Persistence for the bulk-imported transaction dataset
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Atomically replace every stored transaction with `transactions`.
    /// On error the previously stored rows remain untouched.
    /// Returns the number of rows written.
    async fn replace_all(&self, transactions: &[Transaction]) -> Result<usize>;

    /// Load every stored transaction in insertion order
    async fn load_all(&self) -> Result<Vec<Transaction>>;

    async fn count(&self) -> Result<usize>;
}

/// A storage connection that can hand out repositories.
pub trait Connection: Send + Sync + Clone {
    type TransactionRepository: TransactionStorage + Clone;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
