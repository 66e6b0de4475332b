//! Command-line flag parsing.
//!
//! Flags map one-to-one onto [`OrderSpec`] fields. Anything not given falls
//! back to the defaults of the quote form: a 36" × 60" single-hung vinyl
//! window, or a 36" × 80" vinyl entry door, single pane, one unit.

use fenestra_core::{OrderSpec, ProductCategory};
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Fenestra Quote - price a custom window or door

Usage: fenestra-quote [OPTIONS]

Options:
  -c, --config <PATH>      Config file (default: platform config dir/quote.toml)
      --catalog <PATH>     Price catalog file, .toml or .json (default: built-in)
  -t, --category <NAME>    window | door (default: window)
  -k, --kind <KEY>         Product kind, e.g. casement, entry
  -w, --width <INCHES>     Width (default: 36)
  -H, --height <INCHES>    Height (default: 60 for windows, 80 for doors)
  -m, --material <KEY>     Frame material (default: vinyl)
  -g, --glass <KEY>        Glass type (default: single)
  -f, --feature <KEY>      Add-on feature; repeat for more than one
  -q, --quantity <N>       Number of units (default: 1)
      --json               Print JSON instead of text
      --list               Print the catalog's options and exit
  -h, --help               Show this help message

Environment:
  RUST_LOG / FENESTRA_LOG  Log filter (default: warn,fenestra_quote=info)
  FENESTRA_CATALOG_PATH    Catalog file
  FENESTRA_OUTPUT          text | json
";

/// Parsed command-line flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteArgs {
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub category: ProductCategory,
    pub kind: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub material: Option<String>,
    pub glass: Option<String>,
    pub features: Vec<String>,
    pub quantity: Option<u32>,
    pub json: bool,
    pub list: bool,
    pub help: bool,
}

impl QuoteArgs {
    /// Parses flags (without the program name).
    pub fn parse<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = QuoteArgs::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--config" | "-c" => parsed.config = Some(value(&flag, args.next())?.into()),
                "--catalog" => parsed.catalog = Some(value(&flag, args.next())?.into()),
                "--category" | "-t" => {
                    parsed.category = value(&flag, args.next())?
                        .parse()
                        .map_err(|e| CliError::InvalidArgument(format!("{flag}: {e}")))?;
                }
                "--kind" | "-k" => parsed.kind = Some(value(&flag, args.next())?),
                "--width" | "-w" => parsed.width = Some(number(&flag, args.next())?),
                "--height" | "-H" => parsed.height = Some(number(&flag, args.next())?),
                "--material" | "-m" => parsed.material = Some(value(&flag, args.next())?),
                "--glass" | "-g" => parsed.glass = Some(value(&flag, args.next())?),
                "--feature" | "-f" => parsed.features.push(value(&flag, args.next())?),
                "--quantity" | "-q" => parsed.quantity = Some(number(&flag, args.next())?),
                "--json" => parsed.json = true,
                "--list" => parsed.list = true,
                "--help" | "-h" => parsed.help = true,
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "unrecognized flag '{other}' (see --help)"
                    )))
                }
            }
        }

        Ok(parsed)
    }

    /// Builds the order, filling in the form defaults for its category.
    pub fn to_order(&self) -> OrderSpec {
        let (default_kind, default_height) = match self.category {
            ProductCategory::Window => ("single-hung", 60.0),
            ProductCategory::Door => ("entry", 80.0),
        };

        OrderSpec::new(
            self.category,
            self.kind.as_deref().unwrap_or(default_kind),
            self.width.unwrap_or(36.0),
            self.height.unwrap_or(default_height),
            self.material.as_deref().unwrap_or("vinyl"),
            self.glass.as_deref().unwrap_or("single"),
        )
        .with_features(self.features.iter().cloned())
        .with_quantity(self.quantity.unwrap_or(1))
    }
}

fn value(flag: &str, next: Option<String>) -> CliResult<String> {
    next.ok_or_else(|| CliError::InvalidArgument(format!("{flag} requires a value")))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> CliResult<T> {
    let raw = value(flag, next)?;
    raw.parse()
        .map_err(|_| CliError::InvalidArgument(format!("{flag}: '{raw}' is not a valid number")))
}
