//! Item counts per category.
use std::collections::HashMap;

use shared::CategoryCount;

use super::models::Transaction;

/// One entry per distinct category, ordered by first appearance in the input.
/// Categories are compared exactly, so "Books" and "books" are separate.
pub fn breakdown<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Vec<CategoryCount> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for tx in transactions {
        match positions.get(tx.category.as_str()) {
            Some(&index) => counts[index].item_count += 1,
            None => {
                positions.insert(tx.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    category: tx.category.clone(),
                    item_count: 1,
                });
            }
        }
    }

    counts
}
