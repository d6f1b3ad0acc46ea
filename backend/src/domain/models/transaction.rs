//! Domain model for a product sale.
use chrono::{DateTime, Datelike, Utc};

use crate::domain::month::SaleMonth;

/// One immutable product sale. The analytics core only ever reads these.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub sold: bool,
    pub date_of_sale: DateTime<Utc>,
}

impl Transaction {
    /// True when the sale happened in `month` of any year. Months are taken in UTC.
    pub fn sold_in(&self, month: SaleMonth) -> bool {
        self.date_of_sale.month() == month.number()
    }

    /// Decimal text form of the price as searched by the listing:
    /// `150.0` renders as `"150"`, `29.99` as `"29.99"`.
    pub fn price_text(&self) -> String {
        self.price.to_string()
    }

    /// Check the invariants every stored transaction must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() {
            return Err(format!("transaction {} has a non-finite price", self.id));
        }
        if self.price < 0.0 {
            return Err(format!(
                "transaction {} has a negative price ({})",
                self.id, self.price
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Transaction;
    use chrono::{TimeZone, Utc};

    /// Build a transaction sold on the 15th of `month` in `year`
    pub fn sale(id: i64, price: f64, category: &str, sold: bool, year: i32, month: u32) -> Transaction {
        Transaction {
            id,
            title: format!("Product {}", id),
            description: format!("Description of product {}", id),
            category: category.to_string(),
            price,
            image: format!("https://example.com/{}.jpg", id),
            sold,
            date_of_sale: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
        }
    }

    /// The three-record store used throughout the analytics tests
    pub fn sample_store() -> Vec<Transaction> {
        vec![
            sale(1, 50.0, "A", true, 2022, 1),
            sale(2, 150.0, "B", false, 2022, 1),
            sale(3, 999.0, "A", true, 2022, 2),
        ]
    }
}
