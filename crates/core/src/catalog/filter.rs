//! Filter configuration for a catalog listing.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Name,
    Price,
    #[default]
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Inclusive `[min, max]` price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// The range a fresh listing starts with before facets are known.
    pub const DEFAULT: Self = Self {
        min: Decimal::ZERO,
        max: Decimal::ONE_THOUSAND,
    };

    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `price` lies within the bounds, both ends included.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        let amount = price.amount();
        self.min <= amount && amount <= self.max
    }

    /// Whether this range excludes part of `bounds`.
    #[must_use]
    pub fn is_narrower_than(&self, bounds: &Self) -> bool {
        self.min > bounds.min || self.max < bounds.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The complete filter and sort configuration of a listing.
///
/// Empty size or color sets mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub show_on_sale: bool,
    pub show_new_arrivals: bool,
    pub selected_sizes: BTreeSet<String>,
    pub selected_colors: BTreeSet<String>,
    pub price_range: PriceRange,
}

impl FilterState {
    /// Default filters with a specific starting price range.
    #[must_use]
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Self::default()
        }
    }

    /// Add `size` if absent, remove it if present.
    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.selected_sizes, size);
    }

    /// Add `color` if absent, remove it if present.
    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.selected_colors, color);
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

/// Raised when a sort preset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option '{0}' (expected name, price-low, price-high or newest)")]
pub struct SortOptionError(String);

/// Sort presets offered by the listing's sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    Name,
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
}

impl SortOption {
    pub const ALL: [Self; 4] = [Self::Name, Self::PriceLow, Self::PriceHigh, Self::Newest];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Newest => "newest",
        }
    }

    /// Key and direction this preset selects.
    #[must_use]
    pub const fn sort(self) -> (SortBy, SortOrder) {
        match self {
            Self::Name => (SortBy::Name, SortOrder::Asc),
            Self::PriceLow => (SortBy::Price, SortOrder::Asc),
            Self::PriceHigh => (SortBy::Price, SortOrder::Desc),
            Self::Newest => (SortBy::CreatedAt, SortOrder::Desc),
        }
    }

    /// Write this preset's key and direction into `filters`.
    pub fn apply(self, filters: &mut FilterState) {
        let (sort_by, order) = self.sort();
        filters.sort_by = sort_by;
        filters.order = order;
    }

    /// The preset matching `filters`, falling back to `Newest`.
    ///
    /// Any name sort reads as `Name`, whatever its direction.
    #[must_use]
    pub const fn from_filters(filters: &FilterState) -> Self {
        match (filters.sort_by, filters.order) {
            (SortBy::Name, _) => Self::Name,
            (SortBy::Price, SortOrder::Asc) => Self::PriceLow,
            (SortBy::Price, SortOrder::Desc) => Self::PriceHigh,
            (SortBy::CreatedAt, _) => Self::Newest,
        }
    }
}

impl FromStr for SortOption {
    type Err = SortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| SortOptionError(s.to_owned()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
