//! Month name resolution.

use std::fmt;
use std::str::FromStr;

use super::error::AnalyticsError;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A calendar month (1 = January) used to select sales regardless of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SaleMonth(u32);

impl SaleMonth {
    /// Resolve a full English month name, ignoring case.
    ///
    /// Abbreviations ("jan") and numerals are rejected.
    pub fn from_name(name: &str) -> Result<Self, AnalyticsError> {
        MONTH_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .map(|index| SaleMonth(index as u32 + 1))
            .ok_or_else(|| AnalyticsError::InvalidMonth(name.to_string()))
    }

    pub fn from_number(number: u32) -> Result<Self, AnalyticsError> {
        if (1..=12).contains(&number) {
            Ok(SaleMonth(number))
        } else {
            Err(AnalyticsError::InvalidMonth(number.to_string()))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }
}

impl FromStr for SaleMonth {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaleMonth::from_name(s)
    }
}

impl fmt::Display for SaleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
