use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use super::traits::Connection;
use super::transaction_repository::TransactionRepository;

/// DbConnection owns the SQLite pool backing the persisted dataset
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and ensure the schema exists
    pub async fn new(url: &str) -> Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Private in-memory database with a unique name, used by tests
    pub async fn in_memory() -> Result<Self> {
        let db_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", db_id);

        Self::new(&db_url).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // `seq` records insertion order, which is the order every listing uses
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transactions (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id INTEGER NOT NULL UNIQUE,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                price REAL NOT NULL CHECK (price >= 0),
                image TEXT NOT NULL,
                sold BOOLEAN NOT NULL,
                date_of_sale TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

impl Connection for DbConnection {
    type TransactionRepository = TransactionRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        TransactionRepository::new(self.clone())
    }
}
