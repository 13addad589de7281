//! Catalog product snapshot.
//!
//! Products come from the catalog API and are read-only to the storefront
//! core. Optional fields are modelled explicitly: a missing `colors` list or
//! `original_price` is `None` and never matches a filter that asks for it.

use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// Errors raised when a product snapshot violates the catalog contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The selling price is zero or negative.
    #[error("product {id}: price must be positive (got {price})")]
    NonPositivePrice {
        /// Offending product.
        id: ProductId,
        /// Price as received.
        price: Price,
    },
    /// A discounted product lists an original price below its selling price.
    #[error("product {id}: original price {original} is below price {price}")]
    OriginalBelowPrice {
        /// Offending product.
        id: ProductId,
        /// Original (pre-discount) price.
        original: Price,
        /// Selling price.
        price: Price,
    },
    /// The product offers no sizes at all.
    #[error("product {id}: at least one size is required")]
    NoSizes {
        /// Offending product.
        id: ProductId,
    },
}

/// Top-level classification used for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Kids,
    #[default]
    Unisex,
}

impl Category {
    /// Classify a catalog gender slug such as `men`, `womens-wear` or `kids`.
    ///
    /// `women` contains `men`, so it is tested first.
    #[must_use]
    pub fn from_gender_slug(slug: &str) -> Self {
        let slug = slug.to_ascii_lowercase();
        if slug.contains("women") {
            Self::Women
        } else if slug.contains("men") {
            Self::Men
        } else if slug.contains("kid") {
            Self::Kids
        } else {
            Self::Unisex
        }
    }

    /// Slug form used in URLs and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Kids => "kids",
            Self::Unisex => "unisex",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic product label used by the quick filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    NewArrival,
    OnSale,
    Bestseller,
    /// Any label the storefront does not interpret.
    Other(String),
}

impl Tag {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NewArrival => "new-arrival",
            Self::OnSale => "on-sale",
            Self::Bestseller => "bestseller",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        match label.as_str() {
            "new-arrival" => Self::NewArrival,
            "on-sale" => Self::OnSale,
            "bestseller" => Self::Bestseller,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product as shown in the catalog and captured into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// Present only when the product is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Canonical image, the first of `images`.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a product with the required fields and everything else empty.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            sizes: Vec::new(),
            colors: None,
            category: Category::default(),
            tags: Vec::new(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_tags<T: Into<Tag>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_original_price(mut self, original: Price) -> Self {
        self.original_price = Some(original);
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Whether the product carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.has_tag(&Tag::OnSale)
    }

    #[must_use]
    pub fn is_new_arrival(&self) -> bool {
        self.has_tag(&Tag::NewArrival)
    }

    /// Colors on offer, empty when the product has no color variants.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }

    /// Whole-percent discount off `original_price`, if discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        let price = self.price.amount();
        if original <= price || original.is_zero() {
            return None;
        }
        ((original - price) / original * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
    }

    /// Check the catalog contract the storefront relies on.
    ///
    /// # Errors
    ///
    /// Returns a `ProductError` if the price is not positive, the original
    /// price is below the selling price, or no sizes are offered.
    pub fn validate(&self) -> Result<(), ProductError> {
        if !self.price.is_positive() {
            return Err(ProductError::NonPositivePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }

        if let Some(original) = self.original_price
            && original < self.price
        {
            return Err(ProductError::OriginalBelowPrice {
                id: self.id.clone(),
                original,
                price: self.price,
            });
        }

        if self.sizes.is_empty() {
            return Err(ProductError::NoSizes {
                id: self.id.clone(),
            });
        }

        Ok(())
    }
}
