//! Subcommand implementations.

pub mod cart;
pub mod facets;
pub mod filter;

use std::path::Path;

use fashion_store_core::Product;
use fashion_store_core::api::{ApiProduct, ProductListResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::CliError;

/// A products file: either a listing response or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsFile {
    Response(ProductListResponse),
    Bare(Vec<ApiProduct>),
}

/// Load and validate a product dump.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a product
/// fails validation.
pub fn load_products(path: &Path) -> Result<Vec<Product>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file: ProductsFile = serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let products = match file {
        ProductsFile::Response(response) => response.into_products()?,
        ProductsFile::Bare(products) => products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    };

    info!(path = %path.display(), products = products.len(), "Loaded products");
    Ok(products)
}
