//! Fashion Store CLI - catalog and cart tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the listing for a filter configuration
//! fs-cli filter -p products.json --sort price-low --size M --size L --on-sale
//!
//! # Print the sizes, colors and price bounds present in a dump
//! fs-cli facets -p products.json
//!
//! # Replay a cart script and print the cart and order lines
//! fs-cli cart -p products.json -s session.cart
//! ```
//!
//! # Commands
//!
//! - `filter` - Run the catalog filter engine over a product dump
//! - `facets` - Compute filter facets for a product dump
//! - `cart` - Replay add/remove/qty/clear operations through the cart store

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::filter::FilterArgs;
use config::{CliConfig, LogFormat};
use error::CliError;

#[derive(Parser)]
#[command(name = "fs-cli")]
#[command(author, version, about = "Fashion storefront catalog and cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort a product dump
    Filter(FilterArgs),
    /// Print filter facets for a product dump
    Facets {
        /// Product dump (listing response or bare array)
        #[arg(short, long)]
        products: PathBuf,
    },
    /// Replay a cart script
    Cart {
        /// Product dump the script's ids refer to
        #[arg(short, long)]
        products: PathBuf,

        /// Script with one add/remove/qty/clear operation per line
        #[arg(short, long)]
        script: PathBuf,
    },
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let json = format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Filter(args) => commands::filter::run(config, args, &mut out)?,
        Commands::Facets { products } => commands::facets::run(&products, &mut out)?,
        Commands::Cart { products, script } => commands::cart::run(&products, &script, &mut out)?,
    }
    Ok(())
}
