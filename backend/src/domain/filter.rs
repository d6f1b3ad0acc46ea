//! Predicate filter over transactions.
//!
//! A filter combines an optional month constraint with an optional search
//! term. The month matches across every year in the dataset. The search term
//! is matched case-insensitively as a substring of the title, the description,
//! or the decimal text of the price, so searching `"1"` also finds prices such
//! as 10, 21 or 150. Aggregations only ever use the month constraint; search is
//! applied by the paginated listing.

use super::models::Transaction;
use super::month::SaleMonth;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    month: Option<SaleMonth>,
    /// Stored lowercased
    search: Option<String>,
}

impl TransactionFilter {
    /// Matches every transaction
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_month(month: SaleMonth) -> Self {
        Self {
            month: Some(month),
            search: None,
        }
    }

    pub fn with_month(mut self, month: Option<SaleMonth>) -> Self {
        self.month = month;
        self
    }

    /// Add a search term. An empty term leaves the filter unchanged.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    pub fn month(&self) -> Option<SaleMonth> {
        self.month
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(month) = self.month {
            if !transaction.sold_in(month) {
                return false;
            }
        }

        match &self.search {
            Some(term) => {
                transaction.title.to_lowercase().contains(term.as_str())
                    || transaction.description.to_lowercase().contains(term.as_str())
                    || transaction.price_text().contains(term.as_str())
            }
            None => true,
        }
    }

    /// Matching transactions in their original order
    pub fn apply<'a>(&'a self, transactions: &'a [Transaction]) -> impl Iterator<Item = &'a Transaction> + 'a {
        transactions.iter().filter(move |tx| self.matches(tx))
    }
}
