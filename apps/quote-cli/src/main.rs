//! # Fenestra Quote CLI
//!
//! Prices one window or door order from the command line.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          fenestra-quote                                 │
//! │                                                                         │
//! │  1. Initialize Logging (stderr, RUST_LOG / FENESTRA_LOG)                │
//! │  2. Parse Flags ──────────────► --help: print usage, exit 0             │
//! │  3. Load quote.toml + env ────► QuoteConfig                             │
//! │  4. Load Catalog ─────────────► --catalog > config > built-in standard │
//! │  5. --list ───────────────────► print catalog options, exit 0           │
//! │  6. Build OrderSpec ──────────► compute_price()                         │
//! │  7. Print ────────────────────► text or JSON (--json wins)              │
//! │                                                                         │
//! │  Any error: "error: <message>" on stderr, exit code 1                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! fenestra-quote --kind casement --material wood --glass double \
//!     --feature grids --quantity 2
//! fenestra-quote --category door --kind french --width 60 --height 80 --json
//! fenestra-quote --catalog ./prices-2024.toml --list
//! ```

mod args;
mod config;
mod error;
mod render;

use std::process::ExitCode;

use fenestra_core::{compute_price, format::format_currency};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{QuoteArgs, USAGE};
use config::{load_catalog_file, OutputFormat, QuoteConfig};
use error::CliResult;

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over `FENESTRA_LOG`. Logs go to stderr so that stdout
/// carries only the quote.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("FENESTRA_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn,fenestra_quote=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(argv: impl IntoIterator<Item = String>) -> CliResult<()> {
    let args = QuoteArgs::parse(argv)?;

    if args.help {
        print!("{USAGE}");
        return Ok(());
    }

    let config = QuoteConfig::load(args.config.clone())?;
    debug!(?config, "Configuration loaded");

    let catalog = match args.catalog {
        Some(ref path) => load_catalog_file(path)?,
        None => config.load_catalog()?,
    };

    if args.list {
        print!("{}", render::render_catalog(&catalog));
        return Ok(());
    }

    let order = args.to_order();
    let breakdown = compute_price(&order, &catalog)?;
    info!(
        category = %order.category,
        kind = %order.kind,
        quantity = order.quantity,
        total = %format_currency(breakdown.total_price),
        "Quote computed"
    );

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Text => print!("{}", render::render_text(&breakdown, &catalog)),
        OutputFormat::Json => println!("{}", render::render_json(&breakdown, &catalog)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_help() {
        assert!(run(argv(&["--help"])).is_ok());
    }

    #[test]
    fn test_run_unreadable_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("quote.toml");
        std::fs::write(&config, "").unwrap();

        let result = run(argv(&[
            "--config",
            config.to_str().unwrap(),
            "--catalog",
            dir.path().join("missing.toml").to_str().unwrap(),
        ]));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_run_pricing_error_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("quote.toml");
        std::fs::write(&config, "").unwrap();
        let catalog = dir.path().join("prices.json");
        std::fs::write(
            &catalog,
            serde_json::to_string(&fenestra_core::PriceCatalog::standard()).unwrap(),
        )
        .unwrap();

        let result = run(argv(&[
            "--config",
            config.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
            "--material",
            "titanium",
        ]));
        match result {
            Err(CliError::Pricing(e)) => assert!(e.is_unknown_key()),
            other => panic!("expected pricing error, got {other:?}"),
        }
    }
}
