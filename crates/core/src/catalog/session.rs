//! A catalog listing: one fetched snapshot plus the shopper's filters.

use rust_decimal::Decimal;

use super::{FilterEngine, FilterFacets, FilterState, PriceRange, SortOption};
use crate::types::Product;

/// State behind one category or search listing.
///
/// Products are fetched once per context and handed to
/// [`replace_products`](Self::replace_products). Every filter change after
/// that is answered from memory by [`visible`](Self::visible), which always
/// runs the full pipeline over the full snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    products: Vec<Product>,
    facets: FilterFacets,
    filters: FilterState,
    engine: FilterEngine,
    default_range: PriceRange,
}

impl CatalogSession {
    /// An empty listing whose filters start at `default_range`.
    #[must_use]
    pub fn new(engine: FilterEngine, default_range: PriceRange) -> Self {
        Self {
            products: Vec::new(),
            facets: FilterFacets::default(),
            filters: FilterState::with_price_range(default_range),
            engine,
            default_range,
        }
    }

    /// Install a freshly fetched snapshot for a new context.
    ///
    /// Filters are reset, facets recomputed, and the price range seeded from
    /// the facet bounds.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.facets = FilterFacets::from_products(&products);
        self.products = products;
        self.filters =
            FilterState::with_price_range(self.facets.price_bounds.unwrap_or(self.default_range));

        tracing::debug!(
            products = self.products.len(),
            sizes = self.facets.sizes.len(),
            colors = self.facets.colors.len(),
            "Catalog snapshot replaced"
        );
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub const fn facets(&self) -> &FilterFacets {
        &self.facets
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the whole filter state.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn toggle_size(&mut self, size: &str) {
        self.filters.toggle_size(size);
    }

    pub fn toggle_color(&mut self, color: &str) {
        self.filters.toggle_color(color);
    }

    pub fn set_sort(&mut self, option: SortOption) {
        option.apply(&mut self.filters);
    }

    pub const fn set_price_range(&mut self, min: Decimal, max: Decimal) {
        self.filters.price_range = PriceRange::new(min, max);
    }

    pub const fn set_show_on_sale(&mut self, show: bool) {
        self.filters.show_on_sale = show;
    }

    pub const fn set_show_new_arrivals(&mut self, show: bool) {
        self.filters.show_new_arrivals = show;
    }

    /// Facet bounds, or the default range when the snapshot is empty.
    #[must_use]
    pub fn price_bounds(&self) -> PriceRange {
        self.facets.price_bounds.unwrap_or(self.default_range)
    }

    /// Reset every filter, opening the price range to the facet bounds.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::with_price_range(self.price_bounds());
    }

    /// Number of active constraints, as shown on the filter badge.
    ///
    /// Each selected size and color counts once, each quick filter once,
    /// and a price range narrower than the facet bounds once.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        let filters = &self.filters;
        filters.selected_sizes.len()
            + filters.selected_colors.len()
            + usize::from(filters.show_on_sale)
            + usize::from(filters.show_new_arrivals)
            + usize::from(filters.price_range.is_narrower_than(&self.price_bounds()))
    }

    /// The current listing, recomputed from the full snapshot.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        self.engine.compute(&self.products, &self.filters)
    }
}
