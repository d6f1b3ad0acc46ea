//! Fixed ten-bucket price histogram.
use shared::PriceRangeCount;

use super::models::Transaction;

/// A price bucket covering `[min, next bucket's min)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
}

/// Buckets in display order. Lower bounds sit one above the previous label's
/// upper bound, so a price equal to a label's upper bound (100, 900) and any
/// fraction above it (100.5) stays in the lower bucket.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket { label: "0-100", min: 0.0 },
    PriceBucket { label: "101-200", min: 101.0 },
    PriceBucket { label: "201-300", min: 201.0 },
    PriceBucket { label: "301-400", min: 301.0 },
    PriceBucket { label: "401-500", min: 401.0 },
    PriceBucket { label: "501-600", min: 501.0 },
    PriceBucket { label: "601-700", min: 601.0 },
    PriceBucket { label: "701-800", min: 701.0 },
    PriceBucket { label: "801-900", min: 801.0 },
    PriceBucket { label: "901-above", min: 901.0 },
];

/// Index into [`PRICE_BUCKETS`] for a non-negative price
pub fn bucket_index(price: f64) -> usize {
    PRICE_BUCKETS
        .iter()
        .rposition(|bucket| price >= bucket.min)
        .unwrap_or(0)
}

/// Count transactions per bucket. All ten buckets are always returned, in order.
pub fn histogram<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Vec<PriceRangeCount> {
    let mut counts = [0usize; PRICE_BUCKETS.len()];
    for tx in transactions {
        counts[bucket_index(tx.price)] += 1;
    }

    PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| PriceRangeCount {
            range: bucket.label.to_string(),
            count,
        })
        .collect()
}
