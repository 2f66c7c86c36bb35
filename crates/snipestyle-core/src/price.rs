//! Price extraction from display strings and range filtering over records.
//!
//! Extraction is a best-effort heuristic, not a currency-aware parser: it
//! takes the first numeric token it finds and ignores currency symbols and
//! ranges such as `"$10 - $20"`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::record::ResultRecord;

/// Sentinel the API (and the card renderer) uses for a listing without a price.
pub const PRICE_UNAVAILABLE: &str = "Price not available";

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d*)?").expect("valid numeric token regex"));

/// Extracts the first numeric value from a display price string.
///
/// Thousands separators are stripped before matching, so `"$1,299.50"`
/// yields `1299.5`. Returns `None` for absent, blank or sentinel input and
/// for strings with no digits.
#[must_use]
pub fn extract_price(display: Option<&str>) -> Option<f64> {
    let display = display?;
    if display.trim().is_empty() || display == PRICE_UNAVAILABLE {
        return None;
    }

    let cleaned = display.replace(',', "");
    let token = NUMERIC_TOKEN.find(&cleaned)?;
    token.as_str().parse::<f64>().ok()
}

/// Inclusive price bounds, each independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// A range with no bounds; filtering with it is the identity.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Checks only the bounds that are set.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    /// Whether a record passes the range.
    ///
    /// With no active bound every record passes. Otherwise a record whose
    /// price cannot be extracted never passes.
    #[must_use]
    pub fn admits(&self, record: &ResultRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        extract_price(record.price.as_deref()).is_some_and(|p| self.contains(p))
    }

    /// Returns the sub-list of `records` inside the range, in original order.
    #[must_use]
    pub fn filter<'a>(&self, records: &'a [ResultRecord]) -> Vec<&'a ResultRecord> {
        records.iter().filter(|r| self.admits(r)).collect()
    }
}

/// Keeps the records whose extracted price lies in `[min, max]`.
///
/// When both bounds are `None` the input is returned unchanged.
#[must_use]
pub fn filter_by_price(
    records: Vec<ResultRecord>,
    min: Option<f64>,
    max: Option<f64>,
) -> Vec<ResultRecord> {
    let range = PriceRange::new(min, max);
    if !range.is_active() {
        return records;
    }
    records.into_iter().filter(|r| range.admits(r)).collect()
}

/// Lowest, highest and mean extracted price across a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of records that contributed a price.
    pub count: usize,
}

impl PriceStats {
    /// Summarises the extractable, non-zero prices of `records`.
    ///
    /// Returns `None` when no record contributes a price.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ResultRecord>,
    {
        let prices: Vec<f64> = records
            .into_iter()
            .filter_map(|r| extract_price(r.price.as_deref()))
            // Zero-priced listings are placeholders; they stay out of the summary.
            .filter(|p| *p > 0.0)
            .collect();

        if prices.is_empty() {
            return None;
        }

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        #[allow(clippy::cast_precision_loss)]
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;

        Some(Self {
            min,
            max,
            mean,
            count: prices.len(),
        })
    }
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
