//! `fs-cli facets` - print the filter facets of a product dump.

use std::io::Write;
use std::path::Path;

use fashion_store_core::catalog::FilterFacets;

use crate::error::CliError;

/// Write the facets of the products in `path` as pretty JSON.
///
/// # Errors
///
/// Returns an error if the products cannot be loaded or stdout cannot be
/// written.
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let products = super::load_products(path)?;
    let facets = FilterFacets::from_products(&products);

    serde_json::to_writer_pretty(&mut *out, &facets)?;
    writeln!(out)?;
    Ok(())
}
