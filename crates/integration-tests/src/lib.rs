//! Integration tests for the fashion storefront core.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fashion-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Multi-step cart sessions through the store
//! - `catalog_scenarios` - Listings built from API-shaped product dumps
//!
//! This library only holds shared fixtures.

use fashion_store_core::{Category, Price, Product};

/// A plain shirt: sizes S/M/L, no colors, full price.
#[must_use]
pub fn shirt() -> Product {
    Product::new("shirt", "Oxford Shirt", Price::from_cents(4500))
        .with_sizes(["S", "M", "L"])
        .with_category(Category::Men)
}

/// A discounted jacket in two colors.
#[must_use]
pub fn jacket() -> Product {
    Product::new("jacket", "Field Jacket", Price::from_cents(18000))
        .with_sizes(["M", "L"])
        .with_colors(["blue", "olive"])
        .with_original_price(Price::from_cents(24000))
        .with_tags(["on-sale"])
        .with_category(Category::Men)
}

/// Catalog API listing body with a spread of prices, sizes and tags.
#[must_use]
pub fn listing_json() -> serde_json::Value {
    let gender = |slug: &str| {
        serde_json::json!({
            "id": 1, "name": "Tops", "slug": "tops",
            "gender": { "id": 1, "name": slug, "slug": slug }
        })
    };

    serde_json::json!({
        "success": true,
        "products": [
            {
                "id": 1, "title": "Merino Crew", "price": 89.0,
                "images": ["crew.jpg"], "is_new": true, "is_sale": false,
                "sizes": ["S", "M"], "colors": ["navy", "grey"],
                "product_type": gender("men"),
                "created_at": "2024-05-01T09:00:00"
            },
            {
                "id": 2, "title": "Silk Blouse", "price": 120.0, "original_price": 160.0,
                "images": ["blouse.jpg"], "is_new": false, "is_sale": true,
                "sizes": ["XS", "S"], "colors": ["ivory"],
                "product_type": gender("women"),
                "created_at": "2024-02-10T09:00:00"
            },
            {
                "id": 3, "title": "Canvas Tote", "price": 35.5,
                "images": [], "is_new": true, "is_sale": true,
                "sizes": ["One Size"],
                "product_type": gender("unisex")
            },
            {
                "id": 4, "title": "Denim Jacket", "price": 89.0,
                "images": ["denim.jpg"], "is_new": false, "is_sale": false,
                "sizes": ["M", "L"], "colors": ["indigo"],
                "product_type": gender("women"),
                "created_at": "2024-06-15T09:00:00"
            }
        ]
    })
}
