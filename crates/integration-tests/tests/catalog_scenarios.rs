//! Integration tests for catalog listings.
//!
//! Products enter through the catalog API wire shape, exactly as a category
//! fetch would deliver them, and the listing is then driven through filter
//! changes without refetching.

#![allow(clippy::unwrap_used)]

use fashion_store_core::api::ProductListResponse;
use fashion_store_core::catalog::{
    CatalogSession, FilterEngine, FilterFacets, FilterState, PriceRange, RecencySort, SortBy,
    SortOption, SortOrder, compute,
};
use fashion_store_core::{Category, Product};
use fashion_store_integration_tests::listing_json;
use rust_decimal::Decimal;

fn products() -> Vec<Product> {
    let response: ProductListResponse = serde_json::from_value(listing_json()).unwrap();
    response.into_products().unwrap()
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

// =============================================================================
// Wire Conversion
// =============================================================================

#[test]
fn test_listing_converts_with_tags_and_categories() {
    let products = products();

    assert_eq!(products.len(), 4);
    assert!(products[0].is_new_arrival() && !products[0].is_on_sale());
    assert!(products[2].is_new_arrival() && products[2].is_on_sale());
    assert_eq!(products[1].category, Category::Women);
    assert_eq!(products[0].category, Category::Men);
    assert_eq!(products[1].discount_percent(), Some(25));
    assert_eq!(products[2].image, "");
}

// =============================================================================
// Listing Scenarios
// =============================================================================

#[test]
fn test_fresh_listing_shows_everything_in_fetch_order() {
    let mut session = CatalogSession::default();
    session.replace_products(products());

    assert_eq!(
        names(&session.visible()),
        ["Merino Crew", "Silk Blouse", "Canvas Tote", "Denim Jacket"]
    );
    assert_eq!(
        session.filters().price_range,
        PriceRange::new(Decimal::from(35), Decimal::from(120))
    );
}

#[test]
fn test_filters_compose_without_refetch() {
    let mut session = CatalogSession::default();
    session.replace_products(products());

    session.toggle_size("S");
    assert_eq!(names(&session.visible()), ["Merino Crew", "Silk Blouse"]);

    session.set_show_on_sale(true);
    assert_eq!(names(&session.visible()), ["Silk Blouse"]);

    session.set_show_on_sale(false);
    session.toggle_size("S");
    session.toggle_color("indigo");
    session.toggle_color("navy");
    session.set_sort(SortOption::Name);
    assert_eq!(names(&session.visible()), ["Denim Jacket", "Merino Crew"]);
    assert_eq!(session.active_filter_count(), 2);
}

#[test]
fn test_price_sort_keeps_ties_in_fetch_order() {
    let mut session = CatalogSession::default();
    session.replace_products(products());

    session.set_sort(SortOption::PriceLow);
    assert_eq!(
        names(&session.visible()),
        ["Canvas Tote", "Merino Crew", "Denim Jacket", "Silk Blouse"]
    );

    session.set_sort(SortOption::PriceHigh);
    assert_eq!(
        names(&session.visible()),
        ["Silk Blouse", "Merino Crew", "Denim Jacket", "Canvas Tote"]
    );
}

#[test]
fn test_price_bounds_are_inclusive_at_facet_edges() {
    let mut session = CatalogSession::default();
    session.replace_products(products());
    session.set_price_range(Decimal::new(355, 1), Decimal::from(89));

    assert_eq!(
        names(&session.visible()),
        ["Merino Crew", "Canvas Tote", "Denim Jacket"]
    );
}

#[test]
fn test_timestamp_recency_is_opt_in() {
    let products = products();
    let filters = FilterState {
        sort_by: SortBy::CreatedAt,
        order: SortOrder::Desc,
        ..FilterState::default()
    };

    assert_eq!(
        names(&compute(&products, &filters)),
        ["Merino Crew", "Silk Blouse", "Canvas Tote", "Denim Jacket"]
    );

    let engine = FilterEngine::new(RecencySort::ByTimestamp);
    assert_eq!(
        names(&engine.compute(&products, &filters)),
        ["Denim Jacket", "Merino Crew", "Silk Blouse", "Canvas Tote"]
    );
}

#[test]
fn test_facets_match_listing() {
    let facets = FilterFacets::from_products(&products());

    assert_eq!(facets.sizes, ["L", "M", "One Size", "S", "XS"]);
    assert_eq!(facets.colors, ["grey", "indigo", "ivory", "navy"]);
    assert_eq!(
        facets.price_bounds,
        Some(PriceRange::new(Decimal::from(35), Decimal::from(120)))
    );
}

#[test]
fn test_new_context_resets_filters() {
    let mut session = CatalogSession::default();
    session.replace_products(products());
    session.toggle_size("XS");
    session.set_show_new_arrivals(true);
    assert!(session.visible().is_empty());

    let men_only: Vec<Product> = products()
        .into_iter()
        .filter(|p| p.category == Category::Men)
        .collect();
    session.replace_products(men_only);

    assert_eq!(session.active_filter_count(), 0);
    assert_eq!(names(&session.visible()), ["Merino Crew"]);
    assert_eq!(
        session.filters().price_range,
        PriceRange::new(Decimal::from(89), Decimal::from(89))
    );
}
