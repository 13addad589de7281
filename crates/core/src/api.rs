//! Catalog API wire shapes.
//!
//! The catalog backend returns products in its own shape: `title` rather
//! than `name`, `is_new`/`is_sale` flags rather than tags, and the gender
//! nested two levels deep under `product_type`. These types deserialize that
//! shape as-is and convert it into a validated [`Product`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Category, Price, Product, ProductError, ProductId, Tag};

/// Response body of the product listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub products: Vec<ApiProduct>,
}

const fn default_success() -> bool {
    true
}

/// Gender reference nested inside a product type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGender {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Product type (T-shirt, jeans, ...) and the gender it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProductType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub gender: ApiGender,
}

/// A product exactly as the catalog API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProduct {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub original_price: Option<Price>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    pub product_type: ApiProductType,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub sales_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The backend emits integer IDs; older dumps carry strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => ProductId::from(id),
        RawId::Number(id) => ProductId::new(id.to_string()),
    })
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 and the naive `YYYY-MM-DDTHH:MM:SS[.f]` form the backend
/// writes, which is taken to be UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

impl TryFrom<ApiProduct> for Product {
    type Error = ProductError;

    fn try_from(api: ApiProduct) -> Result<Self, Self::Error> {
        let mut tags = Vec::new();
        if api.is_new {
            tags.push(Tag::NewArrival);
        }
        if api.is_sale {
            tags.push(Tag::OnSale);
        }

        let created_at = api.created_at.as_deref().and_then(|raw| {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                tracing::warn!(product_id = %api.id, raw, "Ignoring unparseable created_at");
            }
            parsed
        });

        let product = Self {
            image: api.images.first().cloned().unwrap_or_default(),
            category: Category::from_gender_slug(&api.product_type.gender.slug),
            id: api.id,
            name: api.title,
            description: api.description,
            price: api.price,
            original_price: api.original_price,
            images: api.images,
            sizes: api.sizes,
            colors: api.colors,
            tags,
            created_at,
        };

        product.validate()?;
        Ok(product)
    }
}

impl ProductListResponse {
    /// Convert every product, stopping at the first one that fails validation.
    ///
    /// # Errors
    ///
    /// Returns the `ProductError` of the first invalid product.
    pub fn into_products(self) -> Result<Vec<Product>, ProductError> {
        self.products.into_iter().map(Product::try_from).collect()
    }
}
