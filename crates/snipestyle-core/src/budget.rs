//! Search-form input: query terms, the numeric min/max fields and the
//! budget presets that override them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::price::PriceRange;

/// Maximum number of query terms accepted per search.
pub const MAX_QUERIES: usize = 3;
/// Default value of the max-price field. A max at (or above) this value is
/// treated as "no upper bound".
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;
/// Largest value either price field accepts.
pub const PRICE_CEILING: f64 = 10_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("unknown budget preset \"{0}\"")]
    UnknownPreset(String),

    #[error("at most {max} search terms are allowed, got {count}")]
    TooManyQueries { count: usize, max: usize },

    #[error("{field} must be between 0 and 10000, got {value}")]
    PriceOutOfRange { field: &'static str, value: f64 },
}

/// Named price ranges that replace the min/max fields when selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetPreset {
    #[default]
    Custom,
    Under25,
    From25To50,
    From50To100,
    From100To250,
    From250To500,
    Over500,
}

impl BudgetPreset {
    pub const ALL: [BudgetPreset; 7] = [
        BudgetPreset::Custom,
        BudgetPreset::Under25,
        BudgetPreset::From25To50,
        BudgetPreset::From50To100,
        BudgetPreset::From100To250,
        BudgetPreset::From250To500,
        BudgetPreset::Over500,
    ];

    /// The `(min, max)` pair a preset forces, or `None` for [`BudgetPreset::Custom`].
    #[must_use]
    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            BudgetPreset::Custom => None,
            BudgetPreset::Under25 => Some((0.0, 25.0)),
            BudgetPreset::From25To50 => Some((25.0, 50.0)),
            BudgetPreset::From50To100 => Some((50.0, 100.0)),
            BudgetPreset::From100To250 => Some((100.0, 250.0)),
            BudgetPreset::From250To500 => Some((250.0, 500.0)),
            BudgetPreset::Over500 => Some((500.0, PRICE_CEILING)),
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            BudgetPreset::Custom => "custom",
            BudgetPreset::Under25 => "under-25",
            BudgetPreset::From25To50 => "25-50",
            BudgetPreset::From50To100 => "50-100",
            BudgetPreset::From100To250 => "100-250",
            BudgetPreset::From250To500 => "250-500",
            BudgetPreset::Over500 => "500-plus",
        }
    }

    /// Human label as shown in the budget selector, e.g. `"$25-$50"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BudgetPreset::Custom => "Custom",
            BudgetPreset::Under25 => "Under $25",
            BudgetPreset::From25To50 => "$25-$50",
            BudgetPreset::From50To100 => "$50-$100",
            BudgetPreset::From100To250 => "$100-$250",
            BudgetPreset::From250To500 => "$250-$500",
            BudgetPreset::Over500 => "$500+",
        }
    }
}

impl fmt::Display for BudgetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for BudgetPreset {
    type Err = FormError;

    /// Accepts either the slug (`"25-50"`) or the selector label (`"$25-$50"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BudgetPreset::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(needle) || p.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| FormError::UnknownPreset(s.to_owned()))
    }
}

/// A validated search submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    queries: Vec<String>,
    min_price: f64,
    max_price: f64,
}

impl SearchForm {
    /// Builds a form from raw input.
    ///
    /// Query terms are trimmed and blank ones dropped, keeping entry order.
    /// A non-custom `budget` replaces `min_price`/`max_price`.
    ///
    /// # Errors
    ///
    /// - [`FormError::TooManyQueries`] if more than [`MAX_QUERIES`] terms are given.
    /// - [`FormError::PriceOutOfRange`] if a price field is outside `0..=10000`.
    pub fn new<I, S>(
        queries: I,
        min_price: f64,
        max_price: f64,
        budget: BudgetPreset,
    ) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = queries.into_iter().collect();
        if raw.len() > MAX_QUERIES {
            return Err(FormError::TooManyQueries {
                count: raw.len(),
                max: MAX_QUERIES,
            });
        }

        check_price_field("min price", min_price)?;
        check_price_field("max price", max_price)?;

        let queries = raw
            .iter()
            .map(|q| <S as AsRef<str>>::as_ref(q).trim())
            .filter(|q| !q.is_empty())
            .map(str::to_owned)
            .collect();

        let (min_price, max_price) = budget.bounds().unwrap_or((min_price, max_price));

        Ok(Self {
            queries,
            min_price,
            max_price,
        })
    }

    #[must_use]
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Effective `(min, max)` field values after any preset override.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_price, self.max_price)
    }

    /// The range used for filtering.
    ///
    /// A field left at its default is inactive: min only counts when above
    /// zero, max only when below [`DEFAULT_MAX_PRICE`].
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        PriceRange::new(
            Some(self.min_price).filter(|m| *m > 0.0),
            Some(self.max_price).filter(|m| *m < DEFAULT_MAX_PRICE),
        )
    }
}

fn check_price_field(field: &'static str, value: f64) -> Result<(), FormError> {
    if (0.0..=PRICE_CEILING).contains(&value) {
        Ok(())
    } else {
        Err(FormError::PriceOutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(queries: &[&str], min: f64, max: f64, budget: BudgetPreset) -> SearchForm {
        SearchForm::new(queries.iter().copied(), min, max, budget).expect("valid form")
    }

    #[test]
    fn queries_are_trimmed_and_blanks_dropped() {
        let f = form(&["  sneakers ", "   ", "vintage jacket"], 0.0, 1000.0, BudgetPreset::Custom);
        assert_eq!(f.queries(), ["sneakers", "vintage jacket"]);
    }

    #[test]
    fn more_than_three_queries_rejected() {
        let err = SearchForm::new(["a", "b", "c", "d"], 0.0, 1000.0, BudgetPreset::Custom).unwrap_err();
        assert_eq!(err, FormError::TooManyQueries { count: 4, max: 3 });
    }

    #[test]
    fn price_field_out_of_range_rejected() {
        let err = SearchForm::new(["a"], -1.0, 1000.0, BudgetPreset::Custom).unwrap_err();
        assert!(matches!(err, FormError::PriceOutOfRange { field: "min price", .. }));
        let err = SearchForm::new(["a"], 0.0, 10_001.0, BudgetPreset::Custom).unwrap_err();
        assert!(matches!(err, FormError::PriceOutOfRange { field: "max price", .. }));
    }

    #[test]
    fn default_fields_give_inactive_range() {
        let f = form(&["bag"], 0.0, DEFAULT_MAX_PRICE, BudgetPreset::Custom);
        assert!(!f.price_range().is_active());
    }

    #[test]
    fn custom_fields_activate_independently() {
        let f = form(&["bag"], 20.0, DEFAULT_MAX_PRICE, BudgetPreset::Custom);
        assert_eq!(f.price_range(), PriceRange::new(Some(20.0), None));

        let f = form(&["bag"], 0.0, 80.0, BudgetPreset::Custom);
        assert_eq!(f.price_range(), PriceRange::new(None, Some(80.0)));
    }

    #[test]
    fn preset_overrides_fields() {
        let f = form(&["bag"], 300.0, 900.0, BudgetPreset::From25To50);
        assert_eq!(f.bounds(), (25.0, 50.0));
        assert_eq!(f.price_range(), PriceRange::new(Some(25.0), Some(50.0)));
    }

    #[test]
    fn under_25_is_max_only() {
        let f = form(&["bag"], 0.0, 1000.0, BudgetPreset::Under25);
        assert_eq!(f.price_range(), PriceRange::new(None, Some(25.0)));
    }

    #[test]
    fn over_500_is_min_only() {
        let f = form(&["bag"], 0.0, 1000.0, BudgetPreset::Over500);
        assert_eq!(f.bounds(), (500.0, 10_000.0));
        assert_eq!(f.price_range(), PriceRange::new(Some(500.0), None));
    }

    #[test]
    fn preset_parses_from_slug_and_label() {
        assert_eq!("25-50".parse::<BudgetPreset>(), Ok(BudgetPreset::From25To50));
        assert_eq!("$25-$50".parse::<BudgetPreset>(), Ok(BudgetPreset::From25To50));
        assert_eq!("Under $25".parse::<BudgetPreset>(), Ok(BudgetPreset::Under25));
        assert_eq!("500-PLUS".parse::<BudgetPreset>(), Ok(BudgetPreset::Over500));
        assert_eq!("custom".parse::<BudgetPreset>(), Ok(BudgetPreset::Custom));
    }

    #[test]
    fn unknown_preset_rejected() {
        assert_eq!(
            "cheap".parse::<BudgetPreset>(),
            Err(FormError::UnknownPreset("cheap".to_owned()))
        );
    }

    #[test]
    fn zero_max_is_an_active_bound() {
        let f = form(&["bag"], 0.0, 0.0, BudgetPreset::Custom);
        assert_eq!(f.price_range(), PriceRange::new(None, Some(0.0)));
        assert!(f.price_range().is_active());
    }

    #[test]
    fn every_preset_maps_to_its_bounds() {
        let expected = [
            (BudgetPreset::Custom, None),
            (BudgetPreset::Under25, Some((0.0, 25.0))),
            (BudgetPreset::From25To50, Some((25.0, 50.0))),
            (BudgetPreset::From50To100, Some((50.0, 100.0))),
            (BudgetPreset::From100To250, Some((100.0, 250.0))),
            (BudgetPreset::From250To500, Some((250.0, 500.0))),
            (BudgetPreset::Over500, Some((500.0, PRICE_CEILING))),
        ];
        assert_eq!(expected.len(), BudgetPreset::ALL.len());
        for (preset, (listed, bounds)) in BudgetPreset::ALL.into_iter().zip(expected) {
            assert_eq!(preset, listed, "ALL order");
            assert_eq!(preset.bounds(), bounds, "{preset}");
        }
    }

    #[test]
    fn every_preset_round_trips_through_display() {
        for preset in BudgetPreset::ALL {
            assert_eq!(preset.to_string().parse::<BudgetPreset>(), Ok(preset));
        }
    }
}
