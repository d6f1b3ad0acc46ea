//! Seed data loading.
//!
//! The seed is a JSON array of product sales in the public wire format
//! (`id`, `title`, `price`, `description`, `category`, `image`, `sold`,
//! `dateOfSale`). Loading is all-or-nothing: one bad record rejects the file.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::domain::error::AnalyticsError;
use crate::domain::models::Transaction;
use crate::io::rest::mappers::transaction_mapper::TransactionMapper;

/// Parse and validate seed JSON
pub fn parse_seed(bytes: &[u8]) -> Result<Vec<Transaction>, AnalyticsError> {
    let records: Vec<shared::Transaction> =
        serde_json::from_slice(bytes).map_err(|e| AnalyticsError::InvalidSeed(e.to_string()))?;

    let mut seen_ids = HashSet::with_capacity(records.len());
    let mut transactions = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let transaction = TransactionMapper::to_domain(record);

        transaction
            .validate()
            .map_err(|reason| AnalyticsError::InvalidSeed(format!("record {}: {}", index, reason)))?;

        if !seen_ids.insert(transaction.id) {
            return Err(AnalyticsError::InvalidSeed(format!(
                "record {}: duplicate transaction id {}",
                index, transaction.id
            )));
        }

        transactions.push(transaction);
    }

    Ok(transactions)
}

/// Read and parse the seed file at `path`
pub async fn read_seed_file(path: &Path) -> Result<Vec<Transaction>, AnalyticsError> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    let transactions = parse_seed(&bytes)?;
    info!("Read {} seed records from {}", transactions.len(), path.display());
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": 1, "title": "Fjallraven Backpack", "price": 329.85, "description": "Your perfect pack",
         "category": "men's clothing", "image": "https://example.com/1.jpg", "sold": false,
         "dateOfSale": "2021-11-27T20:29:54+05:30"},
        {"id": 2, "title": "Slim Fit T-Shirts", "price": 44.6, "description": "Slim-fitting style",
         "category": "men's clothing", "image": "https://example.com/2.jpg", "sold": true,
         "dateOfSale": "2021-10-27T20:29:54+05:30"}
    ]"#;

    #[test]
    fn test_parse_seed_keeps_file_order() {
        let transactions = parse_seed(SEED.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, 1);
        assert_eq!(transactions[0].price, 329.85);
        assert_eq!(transactions[1].title, "Slim Fit T-Shirts");
        assert!(transactions[1].sold);
    }

    #[test]
    fn test_malformed_json_is_invalid_seed() {
        assert!(matches!(parse_seed(b"{not json"), Err(AnalyticsError::InvalidSeed(_))));
        assert!(matches!(
            parse_seed(br#"[{"id": 1, "title": "missing fields"}]"#),
            Err(AnalyticsError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_negative_price_rejects_whole_seed() {
        let seed = SEED.replace("44.6", "-44.6");
        match parse_seed(seed.as_bytes()) {
            Err(AnalyticsError::InvalidSeed(message)) => assert!(message.contains("record 1")),
            other => panic!("expected InvalidSeed, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let seed = SEED.replace("\"id\": 2", "\"id\": 1");
        match parse_seed(seed.as_bytes()) {
            Err(AnalyticsError::InvalidSeed(message)) => assert!(message.contains("duplicate")),
            other => panic!("expected InvalidSeed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let transactions = read_seed_file(file.path()).await.unwrap();
        assert_eq!(transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_storage_error() {
        let result = read_seed_file(Path::new("/definitely/not/here.json")).await;
        assert!(matches!(result, Err(AnalyticsError::Storage(_))));
    }
}
