//! Cart line items and their identity key.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// Identity of a line item: product, size and optional color.
///
/// Two adds with equal keys merge into one line. A line with no color only
/// matches a key with no color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LineKey {
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, size: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            color: color.map(str::to_owned),
        }
    }
}

/// A product snapshot in a chosen size and color, with a quantity.
///
/// The product is copied at add time, so later catalog price changes do not
/// reach items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line with quantity 1.
    #[must_use]
    pub const fn new(product: Product, size: String, color: Option<String>) -> Self {
        Self {
            product,
            size,
            color,
            quantity: 1,
        }
    }

    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product.id.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Whether this line has identity `key`.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}
