//! # CLI Error Type
//!
//! Everything that can stop a quote from being printed.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote.toml / catalog file ── Io, TomlParse, Json, Config, Catalog     │
//! │  command-line flags ───────── InvalidArgument                          │
//! │  compute_price() ──────────── Pricing (UnknownKey | Validation)        │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                     main(): "error: ..." on stderr, exit 1              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fenestra_core::{CatalogError, PricingError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file is inconsistent.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A flag is missing its value or the value doesn't parse.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML file doesn't parse.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A JSON catalog doesn't parse, or output couldn't be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The loaded catalog breaks its invariants.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The order can't be priced.
    #[error("{0}")]
    Pricing(#[from] PricingError),
}
