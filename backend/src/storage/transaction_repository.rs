use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::connection::DbConnection;
use super::traits::TransactionStorage;
use crate::domain::models::Transaction;

/// SQLite-backed transaction repository
#[derive(Clone)]
pub struct TransactionRepository {
    db: DbConnection,
}

impl TransactionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_transaction(row: &SqliteRow) -> Result<Transaction> {
        let id: i64 = row.try_get("id")?;
        let date_text: String = row.try_get("date_of_sale")?;
        let date_of_sale = DateTime::parse_from_rfc3339(&date_text)
            .with_context(|| format!("transaction {} has an invalid date_of_sale '{}'", id, date_text))?
            .with_timezone(&Utc);

        Ok(Transaction {
            id,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            price: row.try_get("price")?,
            image: row.try_get("image")?,
            sold: row.try_get("sold")?,
            date_of_sale,
        })
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn replace_all(&self, transactions: &[Transaction]) -> Result<usize> {
        let mut tx = self.db.pool().begin().await?;

        sqlx::query("DELETE FROM transactions")
            .execute(&mut *tx)
            .await?;

        for transaction in transactions {
            sqlx::query(
                r#"
                INSERT INTO transactions (id, title, description, category, price, image, sold, date_of_sale)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(transaction.id)
            .bind(&transaction.title)
            .bind(&transaction.description)
            .bind(&transaction.category)
            .bind(transaction.price)
            .bind(&transaction.image)
            .bind(transaction.sold)
            .bind(transaction.date_of_sale.to_rfc3339())
            .execute(&mut *tx)
            .await
            .with_context(|| format!("failed to insert transaction {}", transaction.id))?;
        }

        tx.commit().await?;
        debug!("Replaced stored dataset with {} transactions", transactions.len());
        Ok(transactions.len())
    }

    async fn load_all(&self) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, category, price, image, sold, date_of_sale
            FROM transactions
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count as usize)
    }
}
