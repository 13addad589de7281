//! `fs-cli filter` - print the visible listing for a filter configuration.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use fashion_store_core::catalog::{CatalogSession, SortOption};
use rust_decimal::Decimal;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Product dump (listing response or bare array)
    #[arg(short, long)]
    pub products: PathBuf,

    /// Sort preset (`name`, `price-low`, `price-high`, `newest`)
    #[arg(short, long, default_value = "newest")]
    pub sort: String,

    /// Only products tagged on-sale
    #[arg(long)]
    pub on_sale: bool,

    /// Only products tagged new-arrival
    #[arg(long)]
    pub new_arrivals: bool,

    /// Size to include (repeatable, any match)
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Color to include (repeatable, any match)
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Lowest price (defaults to the cheapest product, rounded down)
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Highest price (defaults to the dearest product, rounded up)
    #[arg(long)]
    pub max: Option<Decimal>,
}

/// Build a listing from `args` and write one `id<TAB>name<TAB>price` line
/// per visible product.
///
/// # Errors
///
/// Returns an error if the products cannot be loaded, the sort preset is
/// unknown, or stdout cannot be written.
pub fn run(config: &CliConfig, args: FilterArgs, out: &mut impl Write) -> Result<(), CliError> {
    let sort: SortOption = args.sort.parse()?;
    let products = super::load_products(&args.products)?;

    let mut session = CatalogSession::new(config.engine(), config.default_price_range);
    session.replace_products(products);

    session.set_sort(sort);
    session.set_show_on_sale(args.on_sale);
    session.set_show_new_arrivals(args.new_arrivals);
    for size in &args.sizes {
        session.toggle_size(size);
    }
    for color in &args.colors {
        session.toggle_color(color);
    }
    if args.min.is_some() || args.max.is_some() {
        let seeded = session.filters().price_range;
        session.set_price_range(args.min.unwrap_or(seeded.min), args.max.unwrap_or(seeded.max));
    }

    let visible = session.visible();
    info!(
        sort = %sort,
        active_filters = session.active_filter_count(),
        visible = visible.len(),
        total = session.products().len(),
        "Filtered listing"
    );

    for product in visible {
        writeln!(out, "{}\t{}\t{}", product.id, product.name, product.price)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    fn args(products: PathBuf, sort: &str) -> FilterArgs {
        FilterArgs {
            products,
            sort: sort.to_string(),
            on_sale: false,
            new_arrivals: false,
            sizes: Vec::new(),
            colors: Vec::new(),
            min: None,
            max: None,
        }
    }

    fn output(args: FilterArgs) -> String {
        let mut out = Vec::new();
        run(&CliConfig::default(), args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_sorted_listing() {
        let dump = fixtures::listing();
        assert_eq!(
            output(args(dump.path().to_path_buf(), "price-low")),
            "3\tcanvas tote\t$35.50\n1\tMerino Crew\t$89.00\n2\tSilk Blouse\t$120.00\n"
        );
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let dump = fixtures::listing();
        let listing = output(args(dump.path().to_path_buf(), "name"));
        let ids: Vec<&str> = listing.lines().map(|l| l.split('\t').next().unwrap()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_flags_narrow_listing() {
        let dump = fixtures::listing();
        let mut filter = args(dump.path().to_path_buf(), "newest");
        filter.sizes = vec!["S".to_string()];
        filter.max = Some(Decimal::from(100));
        assert_eq!(output(filter), "1\tMerino Crew\t$89.00\n");
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let dump = fixtures::listing();
        let mut out = Vec::new();
        let filter = args(dump.path().to_path_buf(), "cheapest");
        let result = run(&CliConfig::default(), filter, &mut out);
        assert!(matches!(result, Err(CliError::Sort(_))));
        assert!(out.is_empty());
    }
}
