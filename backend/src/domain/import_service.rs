//! Bulk (re)initialization of the transaction dataset.
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::error::AnalyticsError;
use super::models::Transaction;
use crate::storage::{seed, Connection, SnapshotStore, TransactionSnapshot, TransactionStorage};

/// Outcome of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub version: u64,
}

/// Replaces the whole dataset: persists it, then publishes a new snapshot.
///
/// Imports are serialized. Nothing is persisted or published unless every
/// record validates.
#[derive(Clone)]
pub struct ImportService<C: Connection> {
    transaction_repository: C::TransactionRepository,
    store: Arc<SnapshotStore>,
    seed_path: PathBuf,
    import_lock: Arc<Mutex<()>>,
}

impl<C: Connection> ImportService<C> {
    pub fn new(connection: Arc<C>, store: Arc<SnapshotStore>, seed_path: PathBuf) -> Self {
        let transaction_repository = connection.create_transaction_repository();
        Self {
            transaction_repository,
            store,
            seed_path,
            import_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Publish whatever is already persisted. Called once at startup.
    pub async fn restore(&self) -> Result<Arc<TransactionSnapshot>, AnalyticsError> {
        let _guard = self.import_lock.lock().await;
        let transactions = self.transaction_repository.load_all().await?;
        if transactions.is_empty() {
            warn!("No persisted transactions found; queries return empty results until initialized");
        }
        let snapshot = self.store.publish(transactions);
        info!(
            "Restored snapshot v{} with {} transactions",
            snapshot.version(),
            snapshot.len()
        );
        Ok(snapshot)
    }

    /// Import the configured seed file
    pub async fn initialize(&self) -> Result<ImportOutcome, AnalyticsError> {
        let _guard = self.import_lock.lock().await;
        let transactions = seed::read_seed_file(&self.seed_path).await?;
        self.replace_locked(transactions).await
    }

    /// Import an already-parsed dataset
    pub async fn import(&self, transactions: Vec<Transaction>) -> Result<ImportOutcome, AnalyticsError> {
        for transaction in &transactions {
            transaction.validate().map_err(AnalyticsError::InvalidSeed)?;
        }
        let _guard = self.import_lock.lock().await;
        self.replace_locked(transactions).await
    }

    async fn replace_locked(&self, transactions: Vec<Transaction>) -> Result<ImportOutcome, AnalyticsError> {
        let inserted = self.transaction_repository.replace_all(&transactions).await?;
        let snapshot = self.store.publish(transactions);
        info!(
            "Imported {} transactions, published snapshot v{}",
            inserted,
            snapshot.version()
        );
        Ok(ImportOutcome {
            inserted,
            version: snapshot.version(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::transaction::test_support::{sale, sample_store};
    use crate::storage::DbConnection;
    use std::io::Write;

    async fn create_test_service(seed_path: PathBuf) -> (ImportService<DbConnection>, Arc<SnapshotStore>, Arc<DbConnection>) {
        let connection = Arc::new(DbConnection::in_memory().await.unwrap());
        let store = Arc::new(SnapshotStore::new());
        let service = ImportService::new(connection.clone(), store.clone(), seed_path);
        (service, store, connection)
    }

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SEED: &str = r#"[
        {"id": 1, "title": "Backpack", "price": 109.95, "description": "Fits laptops",
         "category": "men's clothing", "image": "https://example.com/1.jpg", "sold": false,
         "dateOfSale": "2021-11-27T20:29:54+05:30"},
        {"id": 2, "title": "Ring", "price": 9.99, "description": "Silver",
         "category": "jewelery", "image": "https://example.com/2.jpg", "sold": true,
         "dateOfSale": "2022-03-27T20:29:54+05:30"}
    ]"#;

    #[tokio::test]
    async fn test_initialize_persists_and_publishes() {
        let seed = write_seed(SEED);
        let (service, store, connection) = create_test_service(seed.path().to_path_buf()).await;

        let outcome = service.initialize().await.unwrap();
        assert_eq!(outcome, ImportOutcome { inserted: 2, version: 1 });
        assert_eq!(store.current().len(), 2);

        let persisted = connection.create_transaction_repository().count().await.unwrap();
        assert_eq!(persisted, 2);
    }

    #[tokio::test]
    async fn test_restore_publishes_persisted_rows() {
        let seed = write_seed(SEED);
        let (service, _, connection) = create_test_service(seed.path().to_path_buf()).await;
        service.initialize().await.unwrap();

        // A fresh store over the same database, as after a restart.
        let restarted_store = Arc::new(SnapshotStore::new());
        let restarted = ImportService::new(connection, restarted_store.clone(), PathBuf::new());
        let snapshot = restarted.restore().await.unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.transactions()[0].title, "Backpack");
        assert_eq!(restarted_store.current().version(), 1);
    }

    #[tokio::test]
    async fn test_invalid_seed_changes_nothing() {
        let (service, store, connection) = create_test_service(PathBuf::new()).await;
        service.import(sample_store()).await.unwrap();
        let pinned = store.current();

        let bad = write_seed(&SEED.replace("9.99", "-9.99"));
        let failing = ImportService::new(connection.clone(), store.clone(), bad.path().to_path_buf());
        assert!(matches!(failing.initialize().await, Err(AnalyticsError::InvalidSeed(_))));

        assert_eq!(store.current().version(), pinned.version());
        let persisted = connection.create_transaction_repository().load_all().await.unwrap();
        assert_eq!(persisted, sample_store());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_published_snapshot() {
        let (service, store, _) = create_test_service(PathBuf::new()).await;
        service.import(sample_store()).await.unwrap();

        let duplicate_ids = vec![sale(5, 1.0, "A", true, 2022, 1), sale(5, 2.0, "B", true, 2022, 1)];
        assert!(matches!(
            service.import(duplicate_ids).await,
            Err(AnalyticsError::Storage(_))
        ));

        assert_eq!(store.current().version(), 1);
        assert_eq!(store.current().len(), 3);
    }

    #[tokio::test]
    async fn test_import_rejects_negative_prices() {
        let (service, store, _) = create_test_service(PathBuf::new()).await;
        let result = service.import(vec![sale(1, -5.0, "A", true, 2022, 1)]).await;
        assert!(matches!(result, Err(AnalyticsError::InvalidSeed(_))));
        assert_eq!(store.current().version(), 0);
    }
}
