//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STORE_DEFAULT_PRICE_MIN` - Lower bound of a fresh listing's price range (default: 0)
//! - `STORE_DEFAULT_PRICE_MAX` - Upper bound of a fresh listing's price range (default: 1000)
//! - `STORE_RECENCY_SORT` - `preserve` (fetch order) or `timestamp` (default: preserve)
//! - `STORE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Tracing filter (default: info)

use std::str::FromStr;

use fashion_store_core::catalog::{FilterEngine, PriceRange, RecencySort};
use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Price range a listing starts with before facets are known
    pub default_price_range: PriceRange,
    /// How `created_at` sorts order products
    pub recency: RecencySort,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value or
    /// the price range is inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let min = parse_decimal(
            "STORE_DEFAULT_PRICE_MIN",
            &get_env_or_default("STORE_DEFAULT_PRICE_MIN", "0"),
        )?;
        let max = parse_decimal(
            "STORE_DEFAULT_PRICE_MAX",
            &get_env_or_default("STORE_DEFAULT_PRICE_MAX", "1000"),
        )?;
        if min > max {
            return Err(ConfigError::InvalidEnvVar(
                "STORE_DEFAULT_PRICE_MIN".to_string(),
                format!("{min} is above STORE_DEFAULT_PRICE_MAX ({max})"),
            ));
        }

        let recency = parse_recency(&get_env_or_default("STORE_RECENCY_SORT", "preserve"))?;
        let log_format = parse_log_format(&get_env_or_default("STORE_LOG_FORMAT", "pretty"))?;

        Ok(Self {
            default_price_range: PriceRange::new(min, max),
            recency,
            log_format,
        })
    }

    /// The filter engine this configuration selects.
    #[must_use]
    pub const fn engine(&self) -> FilterEngine {
        FilterEngine::new(self.recency)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_price_range: PriceRange::DEFAULT,
            recency: RecencySort::default(),
            log_format: LogFormat::default(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    Decimal::from_str(value.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_recency(value: &str) -> Result<RecencySort, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "preserve" => Ok(RecencySort::PreserveFetchOrder),
        "timestamp" => Ok(RecencySort::ByTimestamp),
        other => Err(ConfigError::InvalidEnvVar(
            "STORE_RECENCY_SORT".to_string(),
            format!("expected 'preserve' or 'timestamp', got '{other}'"),
        )),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            "STORE_LOG_FORMAT".to_string(),
            format!("expected 'pretty' or 'json', got '{other}'"),
        )),
    }
}
