//! `fs-cli cart` - replay a cart script against a product dump.
//!
//! One operation per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! add <product-id> <size> [color]
//! remove <product-id> <size> [color]
//! qty <product-id> <size> <quantity> [color]
//! clear
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use fashion_store_core::cart::{CartState, CartStore, OrderLine};
use fashion_store_core::{Product, ProductId};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOp {
    Add {
        product_id: ProductId,
        size: String,
        color: Option<String>,
    },
    Remove {
        product_id: ProductId,
        size: String,
        color: Option<String>,
    },
    Quantity {
        product_id: ProductId,
        size: String,
        quantity: i64,
        color: Option<String>,
    },
    Clear,
}

/// Parse one script line. Returns `Ok(None)` for blanks and comments.
///
/// # Errors
///
/// Returns a message describing what is wrong with the line.
pub fn parse_line(line: &str) -> Result<Option<ScriptOp>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let op = match words.as_slice() {
        ["add", id, size] | ["add", id, size, _] => ScriptOp::Add {
            product_id: ProductId::from(*id),
            size: (*size).to_owned(),
            color: words.get(3).map(|c| (*c).to_owned()),
        },
        ["remove", id, size] | ["remove", id, size, _] => ScriptOp::Remove {
            product_id: ProductId::from(*id),
            size: (*size).to_owned(),
            color: words.get(3).map(|c| (*c).to_owned()),
        },
        ["qty", id, size, quantity] | ["qty", id, size, quantity, _] => ScriptOp::Quantity {
            product_id: ProductId::from(*id),
            size: (*size).to_owned(),
            quantity: quantity
                .parse()
                .map_err(|_| format!("quantity '{quantity}' is not an integer"))?,
            color: words.get(4).map(|c| (*c).to_owned()),
        },
        ["clear"] => ScriptOp::Clear,
        [verb, ..] => return Err(format!("cannot parse '{verb}' with {} argument(s)", words.len() - 1)),
        [] => return Ok(None),
    };
    Ok(Some(op))
}

/// Final cart as printed by the command.
#[derive(Debug, Serialize)]
struct CartReport<'a> {
    cart: &'a CartState,
    item_count: u64,
    order_lines: Vec<OrderLine>,
}

/// Replay the script at `script` against the products in `products` and
/// write the resulting cart and order lines as pretty JSON.
///
/// # Errors
///
/// Returns an error if either file cannot be read, a line does not parse,
/// or a line adds a product id that is not in the dump.
pub fn run(products: &Path, script: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let catalog: HashMap<ProductId, Product> = super::load_products(products)?
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect();

    let content = std::fs::read_to_string(script).map_err(|source| CliError::Read {
        path: script.to_path_buf(),
        source,
    })?;

    let script_error = |line: usize, message: String| CliError::Script {
        path: script.to_path_buf(),
        line,
        message,
    };

    let mut store = CartStore::new();
    store.subscribe(|state| {
        debug!(lines = state.items().len(), total = %state.total(), "Cart changed");
    });

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let Some(op) = parse_line(raw).map_err(|message| script_error(line, message))? else {
            continue;
        };

        match op {
            ScriptOp::Add {
                product_id,
                size,
                color,
            } => {
                let product = catalog
                    .get(&product_id)
                    .ok_or_else(|| script_error(line, format!("unknown product '{product_id}'")))?;
                store.add_item(product.clone(), &size, color.as_deref());
            }
            ScriptOp::Remove {
                product_id,
                size,
                color,
            } => store.remove_item(&product_id, &size, color.as_deref()),
            ScriptOp::Quantity {
                product_id,
                size,
                quantity,
                color,
            } => store.update_quantity(&product_id, &size, color.as_deref(), quantity),
            ScriptOp::Clear => store.clear(),
        }
    }

    let state = store.state();
    info!(lines = state.items().len(), total = %state.total(), "Replayed cart script");

    let report = CartReport {
        cart: state,
        item_count: state.item_count(),
        order_lines: state.order_lines(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_parse_add_with_and_without_color() {
        assert_eq!(
            parse_line("add 7 M").unwrap(),
            Some(ScriptOp::Add {
                product_id: ProductId::new("7"),
                size: "M".to_string(),
                color: None,
            })
        );
        assert_eq!(
            parse_line("  add 7 L blue ").unwrap(),
            Some(ScriptOp::Add {
                product_id: ProductId::new("7"),
                size: "L".to_string(),
                color: Some("blue".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_qty_accepts_negative() {
        assert_eq!(
            parse_line("qty 7 M -1").unwrap(),
            Some(ScriptOp::Quantity {
                product_id: ProductId::new("7"),
                size: "M".to_string(),
                quantity: -1,
                color: None,
            })
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# warm-up").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert!(parse_line("add 7").is_err());
        assert!(parse_line("qty 7 M lots").is_err());
        assert!(parse_line("checkout").is_err());
        assert!(parse_line("clear now").is_err());
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse_line("clear").unwrap(), Some(ScriptOp::Clear));
    }

    #[test]
    fn test_run_replays_script() {
        let dump = fixtures::listing();
        let script = fixtures::write_file(
            "# two crews and a blouse\nadd 1 M navy\nadd 1 M navy\nadd 2 S\nqty 1 M 3 navy\n\nremove 2 S\n",
        );
        let mut out = Vec::new();
        run(dump.path(), script.path(), &mut out).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["item_count"], 3);
        assert_eq!(
            report["order_lines"],
            serde_json::json!([{ "product_id": "1", "quantity": 3, "size": "M", "color": "navy" }])
        );
    }

    #[test]
    fn test_run_rejects_unknown_product_with_line() {
        let dump = fixtures::listing();
        let script = fixtures::write_file("add 1 M\nadd 99 M\n");
        let mut out = Vec::new();

        let err = run(dump.path(), script.path(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Script { line: 2, .. }));
        assert!(out.is_empty());
    }
}
