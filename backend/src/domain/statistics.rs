//! Sales totals for a filtered set of transactions.
use shared::StatisticsSummary;

use super::models::Transaction;

/// Sum prices and count sold/unsold items. Empty input yields the zero summary.
pub fn summarize<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> StatisticsSummary {
    transactions
        .into_iter()
        .fold(StatisticsSummary::default(), |mut summary, tx| {
            summary.total_sales_amount += tx.price;
            if tx.sold {
                summary.total_sold_items += 1;
            } else {
                summary.total_not_sold_items += 1;
            }
            summary
        })
}
