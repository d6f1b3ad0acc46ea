//! # Snapshot Store
//!
//! Holds the published, immutable version of the transaction dataset.
//!
//! A query pins the current snapshot once (an `Arc` clone) and works on it for
//! its whole duration. An import builds a complete new snapshot out of place
//! and publishes it by swapping the single pointer, so in-flight queries keep
//! seeing the version they pinned and nobody ever observes a half-replaced
//! dataset. The lock is only held long enough to clone or replace the pointer.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::domain::models::Transaction;

/// One complete, immutable version of the dataset.
#[derive(Debug)]
pub struct TransactionSnapshot {
    version: u64,
    loaded_at: DateTime<Utc>,
    transactions: Vec<Transaction>,
}

impl TransactionSnapshot {
    fn new(version: u64, transactions: Vec<Transaction>) -> Self {
        Self {
            version,
            loaded_at: Utc::now(),
            transactions,
        }
    }

    /// Monotonically increasing; 0 is the empty snapshot a store starts with
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// All transactions in store (insertion) order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Anything that can hand out the current snapshot.
///
/// `None` means no store is attached at all, which is a configuration fault
/// and distinct from an attached store that is still empty.
pub trait SnapshotSource: Send + Sync {
    fn pin(&self) -> Option<Arc<TransactionSnapshot>>;
}

/// Publishes snapshots by atomic pointer swap.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<TransactionSnapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    /// A store holding the empty version-0 snapshot
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(TransactionSnapshot::new(0, Vec::new()))),
        }
    }

    pub fn current(&self) -> Arc<TransactionSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the whole dataset. Returns the newly published snapshot.
    pub fn publish(&self, transactions: Vec<Transaction>) -> Arc<TransactionSnapshot> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(TransactionSnapshot::new(guard.version + 1, transactions));
        *guard = Arc::clone(&next);
        next
    }
}

impl SnapshotSource for SnapshotStore {
    fn pin(&self) -> Option<Arc<TransactionSnapshot>> {
        Some(self.current())
    }
}
