//! Filter facets derived from a product snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::PriceRange;
use crate::types::Product;

/// The sizes, colors and price span actually present in a product list.
///
/// Used to populate filter controls and to seed the price range. Facets are
/// never used to filter products themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterFacets {
    /// Distinct sizes, sorted.
    pub sizes: Vec<String>,
    /// Distinct colors, sorted.
    pub colors: Vec<String>,
    /// `[floor(min price), ceil(max price)]`, or `None` for an empty list.
    pub price_bounds: Option<PriceRange>,
}

impl FilterFacets {
    /// Scan `products` once.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut sizes = BTreeSet::new();
        let mut colors = BTreeSet::new();
        let mut span: Option<PriceRange> = None;

        for product in products {
            sizes.extend(product.sizes.iter().map(String::as_str));
            colors.extend(product.colors().iter().map(String::as_str));

            let price = product.price.amount();
            span = Some(match span {
                Some(range) => PriceRange::new(range.min.min(price), range.max.max(price)),
                None => PriceRange::new(price, price),
            });
        }

        Self {
            sizes: sizes.into_iter().map(str::to_owned).collect(),
            colors: colors.into_iter().map(str::to_owned).collect(),
            price_bounds: span.map(|range| PriceRange::new(range.min.floor(), range.max.ceil())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::Price;

    #[test]
    fn test_collects_distinct_sorted_values() {
        let products = vec![
            Product::new("1", "A", Price::from_cents(1999))
                .with_sizes(["M", "S"])
                .with_colors(["red"]),
            Product::new("2", "B", Price::from_cents(4550)).with_sizes(["L", "M"]),
            Product::new("3", "C", Price::from_cents(2500))
                .with_sizes(["32"])
                .with_colors(["blue", "red"]),
        ];

        let facets = FilterFacets::from_products(&products);

        assert_eq!(facets.sizes, ["32", "L", "M", "S"]);
        assert_eq!(facets.colors, ["blue", "red"]);
        assert_eq!(
            facets.price_bounds,
            Some(PriceRange::new(Decimal::from(19), Decimal::from(46)))
        );
    }

    #[test]
    fn test_whole_prices_are_not_widened() {
        let products = vec![Product::new("1", "A", Price::from_cents(3000)).with_sizes(["M"])];
        let bounds = FilterFacets::from_products(&products).price_bounds.unwrap();
        assert_eq!(bounds.min, Decimal::from(30));
        assert_eq!(bounds.max, Decimal::from(30));
    }

    #[test]
    fn test_empty_list_has_no_bounds() {
        let facets = FilterFacets::from_products(&[]);
        assert!(facets.sizes.is_empty());
        assert!(facets.colors.is_empty());
        assert_eq!(facets.price_bounds, None);
    }
}
