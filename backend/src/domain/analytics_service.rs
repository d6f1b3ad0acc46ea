//! Month-based analytics over the published transaction snapshot.
//!
//! Every query pins exactly one snapshot up front and never goes back to the
//! store, so all figures in a response describe the same dataset version even
//! while an import publishes a new one.

use std::sync::Arc;

use shared::{CategoryCount, CombinedView, PriceRangeCount, SnapshotInfo, StatisticsSummary};
use tracing::{debug, info};

use super::category_breakdown;
use super::commands::listing::{ListingPage, ListingQuery};
use super::error::AnalyticsError;
use super::filter::TransactionFilter;
use super::models::Transaction;
use super::month::SaleMonth;
use super::price_histogram;
use super::statistics;
use crate::storage::{SnapshotSource, TransactionSnapshot};

#[derive(Clone)]
pub struct AnalyticsService {
    source: Arc<dyn SnapshotSource>,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    fn pin(&self) -> Result<Arc<TransactionSnapshot>, AnalyticsError> {
        self.source.pin().ok_or(AnalyticsError::DataUnavailable)
    }

    pub fn snapshot_info(&self) -> Result<SnapshotInfo, AnalyticsError> {
        let snapshot = self.pin()?;
        Ok(SnapshotInfo {
            version: snapshot.version(),
            transaction_count: snapshot.len(),
            loaded_at: snapshot.loaded_at(),
        })
    }

    /// Every transaction in store order
    pub fn all_transactions(&self) -> Result<Vec<Transaction>, AnalyticsError> {
        Ok(self.pin()?.transactions().to_vec())
    }

    /// Every transaction sold in `month`, across all years
    pub fn transactions_for_month(&self, month: SaleMonth) -> Result<Vec<Transaction>, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = TransactionFilter::for_month(month);
        Ok(filter.apply(snapshot.transactions()).cloned().collect())
    }

    pub fn statistics(&self, month: SaleMonth) -> Result<StatisticsSummary, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = TransactionFilter::for_month(month);
        Ok(statistics::summarize(filter.apply(snapshot.transactions())))
    }

    pub fn price_histogram(&self, month: SaleMonth) -> Result<Vec<PriceRangeCount>, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = TransactionFilter::for_month(month);
        Ok(price_histogram::histogram(filter.apply(snapshot.transactions())))
    }

    pub fn category_breakdown(&self, month: SaleMonth) -> Result<Vec<CategoryCount>, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = TransactionFilter::for_month(month);
        Ok(category_breakdown::breakdown(filter.apply(snapshot.transactions())))
    }

    /// Statistics, histogram and category breakdown for one month, computed
    /// concurrently over a single pinned snapshot.
    ///
    /// Fails as a whole if any of the three aggregations fails.
    pub async fn combined_view(&self, month: SaleMonth) -> Result<CombinedView, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = TransactionFilter::for_month(month);
        let rows: Arc<[Transaction]> = filter.apply(snapshot.transactions()).cloned().collect();
        debug!(
            "Combined view for {} over snapshot v{} ({} rows)",
            month,
            snapshot.version(),
            rows.len()
        );

        let (statistics, bar_chart, pie_chart) = tokio::try_join!(
            run_aggregation("statistics", Arc::clone(&rows), |rows| statistics::summarize(rows)),
            run_aggregation("histogram", Arc::clone(&rows), |rows| price_histogram::histogram(rows)),
            run_aggregation("category", Arc::clone(&rows), |rows| category_breakdown::breakdown(rows)),
        )?;

        Ok(CombinedView {
            statistics,
            bar_chart,
            pie_chart,
        })
    }

    /// One page of transactions matching the query's search term and month
    pub fn list_transactions(&self, query: &ListingQuery) -> Result<ListingPage, AnalyticsError> {
        let snapshot = self.pin()?;
        let filter = query.filter();
        let matches: Vec<&Transaction> = filter.apply(snapshot.transactions()).collect();

        let transactions = matches
            .iter()
            .skip(query.offset())
            .take(query.per_page as usize)
            .map(|tx| (*tx).clone())
            .collect::<Vec<_>>();

        info!(
            "Listing page {} ({} per page): {} of {} matches",
            query.page,
            query.per_page,
            transactions.len(),
            matches.len()
        );

        Ok(ListingPage {
            total: matches.len(),
            page: query.page,
            per_page: query.per_page,
            transactions,
        })
    }
}

/// Run one aggregation on the blocking pool. A panic or cancellation of the
/// task is reported as an [`AnalyticsError::AggregationFailure`] naming it.
pub(crate) async fn run_aggregation<T, F>(
    aggregation: &'static str,
    rows: Arc<[Transaction]>,
    aggregate: F,
) -> Result<T, AnalyticsError>
where
    T: Send + 'static,
    F: FnOnce(&[Transaction]) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || aggregate(&rows))
        .await
        .map_err(|e| AnalyticsError::AggregationFailure {
            aggregation,
            reason: e.to_string(),
        })
}
