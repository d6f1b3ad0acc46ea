//! Domain-level query types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for turning raw
//! query strings into these types and mapping results to the DTOs defined in
//! the `shared` crate.

pub mod listing {
    use crate::domain::error::AnalyticsError;
    use crate::domain::filter::TransactionFilter;
    use crate::domain::models::Transaction;
    use crate::domain::month::SaleMonth;

    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 10;

    /// Validated input for the paginated listing.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ListingQuery {
        pub search: String,
        pub month: Option<SaleMonth>,
        /// 1-based page number
        pub page: u32,
        pub per_page: u32,
    }

    impl Default for ListingQuery {
        fn default() -> Self {
            Self {
                search: String::new(),
                month: None,
                page: DEFAULT_PAGE,
                per_page: DEFAULT_PER_PAGE,
            }
        }
    }

    impl ListingQuery {
        /// Build a query from raw, untyped request parameters.
        ///
        /// Absent or empty values take their defaults. `page` and `per_page`
        /// must be positive integers and `month` a full month name.
        pub fn from_params(
            search: Option<&str>,
            page: Option<&str>,
            per_page: Option<&str>,
            month: Option<&str>,
        ) -> Result<Self, AnalyticsError> {
            let month = match month.filter(|m| !m.is_empty()) {
                Some(name) => Some(SaleMonth::from_name(name)?),
                None => None,
            };

            Ok(Self {
                search: search.unwrap_or_default().to_string(),
                month,
                page: parse_positive("page", page, DEFAULT_PAGE)?,
                per_page: parse_positive("perPage", per_page, DEFAULT_PER_PAGE)?,
            })
        }

        pub fn filter(&self) -> TransactionFilter {
            TransactionFilter::all()
                .with_search(&self.search)
                .with_month(self.month)
        }

        /// Number of matches skipped before this page starts
        pub fn offset(&self) -> usize {
            (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
        }
    }

    fn parse_positive(name: &str, raw: Option<&str>, default: u32) -> Result<u32, AnalyticsError> {
        let raw = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => return Ok(default),
        };

        match raw.parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(AnalyticsError::InvalidPagination(format!(
                "{} must be a positive integer, got '{}'",
                name, raw
            ))),
        }
    }

    /// One page of matching transactions.
    #[derive(Debug, Clone)]
    pub struct ListingPage {
        pub total: usize,
        pub page: u32,
        pub per_page: u32,
        pub transactions: Vec<Transaction>,
    }

}
