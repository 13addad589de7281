//! The catalog filter/sort pipeline.
//!
//! [`FilterEngine::compute`] narrows a fetched product snapshot with five
//! independent predicates and then stable-sorts the survivors. It never
//! mutates its input and returns references into it, so unchanged products
//! keep their identity across recomputations.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{FilterState, SortBy, SortOrder};
use crate::types::Product;

/// How a `created_at` sort orders products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecencySort {
    /// Leave products in fetch order, which the catalog API returns newest
    /// first. The sort direction is ignored.
    #[default]
    PreserveFetchOrder,
    /// Order by `created_at`. Products without a timestamp come after those
    /// with one, in either direction.
    ByTimestamp,
}

/// One narrowing stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    Sale,
    NewArrival,
    Size,
    Color,
    Price,
}

impl FilterStage {
    /// Stages in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Sale,
        Self::NewArrival,
        Self::Size,
        Self::Color,
        Self::Price,
    ];

    /// Whether `product` survives this stage under `filters`.
    #[must_use]
    pub fn retains(self, product: &Product, filters: &FilterState) -> bool {
        match self {
            Self::Sale => !filters.show_on_sale || product.is_on_sale(),
            Self::NewArrival => !filters.show_new_arrivals || product.is_new_arrival(),
            Self::Size => {
                filters.selected_sizes.is_empty()
                    || product
                        .sizes
                        .iter()
                        .any(|size| filters.selected_sizes.contains(size))
            }
            Self::Color => {
                filters.selected_colors.is_empty()
                    || product
                        .colors()
                        .iter()
                        .any(|color| filters.selected_colors.contains(color))
            }
            Self::Price => filters.price_range.contains(product.price),
        }
    }
}

/// Apply `stages` in the given order, keeping input order.
#[must_use]
pub fn apply_stages<'a>(
    products: &'a [Product],
    filters: &FilterState,
    stages: &[FilterStage],
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| stages.iter().all(|stage| stage.retains(product, filters)))
        .collect()
}

/// Filter/sort pipeline with a configurable recency policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterEngine {
    recency: RecencySort,
}

impl FilterEngine {
    #[must_use]
    pub const fn new(recency: RecencySort) -> Self {
        Self { recency }
    }

    #[must_use]
    pub const fn recency(&self) -> RecencySort {
        self.recency
    }

    /// The visible, ordered subset of `products` under `filters`.
    #[instrument(level = "debug", skip_all, fields(products = products.len()))]
    pub fn compute<'a>(&self, products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
        let mut visible = apply_stages(products, filters, &FilterStage::ALL);
        self.sort(&mut visible, filters.sort_by, filters.order);

        tracing::debug!(visible = visible.len(), "Computed catalog listing");
        visible
    }

    /// Stable sort; ties keep their relative order.
    fn sort(&self, products: &mut [&Product], sort_by: SortBy, order: SortOrder) {
        let directed = |ordering: Ordering| match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };

        match sort_by {
            SortBy::Name => products.sort_by(|a, b| directed(compare_names(&a.name, &b.name))),
            SortBy::Price => products.sort_by(|a, b| directed(a.price.cmp(&b.price))),
            SortBy::CreatedAt => match self.recency {
                RecencySort::PreserveFetchOrder => {}
                RecencySort::ByTimestamp => {
                    products.sort_by(|a, b| match (a.created_at, b.created_at) {
                        (Some(a), Some(b)) => directed(a.cmp(&b)),
                        (Some(_), None) => Ordering::Less,
                        (None, Some(_)) => Ordering::Greater,
                        (None, None) => Ordering::Equal,
                    });
                }
            },
        }
    }
}

/// Case-insensitive name order. Names differing only in case tie.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// [`FilterEngine::compute`] with the default recency policy.
#[must_use]
pub fn compute<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    FilterEngine::default().compute(products, filters)
}
