//! # Quote Configuration
//!
//! Where the CLI finds its catalog and how it prints quotes.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in main.rs)          │
//! │     --catalog ./prices.toml   --json                                   │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     FENESTRA_CATALOG_PATH=/etc/fenestra/prices.toml                    │
//! │     FENESTRA_OUTPUT=json                                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/fenestra-quote/quote.toml (Linux)                        │
//! │     ~/Library/Application Support/com.fenestra.quote/quote.toml (macOS)│
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     built-in standard catalog, text output                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # quote.toml
//! [catalog]
//! path = "/srv/fenestra/prices-2024.toml"   # .toml or .json
//!
//! [output]
//! format = "text"  # text | json
//! ```
//!
//! Log verbosity is not part of this file: it comes from `RUST_LOG` or
//! `FENESTRA_LOG`, because logging starts before the file is read.

use fenestra_core::PriceCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How a quote is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Labeled lines, one per breakdown component.
    #[default]
    Text,

    /// The breakdown and its display lines as JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Which price catalog to load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file. `None` uses the built-in standard catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

// =============================================================================
// Main Quote Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote.toml)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the default path may be absent.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with(config_path, |name| std::env::var(name).ok())
    }

    /// Same as [`QuoteConfig::load`], reading variables from `var`.
    pub fn load_with(
        config_path: Option<PathBuf>,
        var: impl Fn(&str) -> Option<String>,
    ) -> CliResult<Self> {
        let mut config = Self::default();

        let explicit = config_path.is_some();
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading quote config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else if explicit {
                return Err(CliError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(var);
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if let Some(ref path) = self.catalog.path {
            if path.as_os_str().is_empty() {
                return Err(CliError::Config("catalog.path must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Applies overrides from any variable source.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("FENESTRA_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(format) = var("FENESTRA_OUTPUT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "fenestra", "quote")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }

    /// Loads the configured catalog, or the standard one if none is set.
    pub fn load_catalog(&self) -> CliResult<PriceCatalog> {
        match self.catalog.path {
            Some(ref path) => load_catalog_file(path),
            None => {
                debug!("Using built-in standard catalog");
                Ok(PriceCatalog::standard())
            }
        }
    }
}

/// Reads, parses and validates a catalog file (`.json`, otherwise TOML).
pub fn load_catalog_file(path: &Path) -> CliResult<PriceCatalog> {
    info!(?path, "Loading price catalog");
    let contents = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let catalog: PriceCatalog = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    catalog.validate()?;
    debug!(
        windows = catalog.windows.len(),
        doors = catalog.doors.len(),
        features = catalog.features.len(),
        "Catalog validated"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("FENESTRA_CATALOG_PATH", "/tmp/prices.toml"),
            ("FENESTRA_OUTPUT", "json"),
        ]);
        let mut config = QuoteConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/prices.toml")));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_output_override_is_ignored() {
        let mut config = QuoteConfig::default();
        config.apply_overrides(|name| (name == "FENESTRA_OUTPUT").then(|| "yaml".to_string()));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = QuoteConfig::load_with(Some(file.path().to_path_buf()), |_| None).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = QuoteConfig::load_with(Some(file.path().to_path_buf()), |name| {
            (name == "FENESTRA_OUTPUT").then(|| "text".to_string())
        })
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            QuoteConfig::load_with(Some(missing), |_| None),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_empty_catalog_path_is_invalid() {
        let mut config = QuoteConfig::default();
        config.catalog.path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_catalog_defaults_to_standard() {
        let catalog = QuoteConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, PriceCatalog::standard());
    }

    #[test]
    fn test_load_catalog_file_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let standard = PriceCatalog::standard();

        let toml_path = dir.path().join("prices.toml");
        std::fs::write(&toml_path, toml::to_string_pretty(&standard).unwrap()).unwrap();
        assert_eq!(load_catalog_file(&toml_path).unwrap(), standard);

        let json_path = dir.path().join("prices.JSON");
        std::fs::write(&json_path, serde_json::to_string(&standard).unwrap()).unwrap();
        assert_eq!(load_catalog_file(&json_path).unwrap(), standard);
    }

    #[test]
    fn test_load_catalog_file_rejects_invalid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut broken = PriceCatalog::standard();
        broken.size_pricing.max_area = 0.0;

        let path = dir.path().join("broken.json");
        std::fs::write(&path, serde_json::to_string(&broken).unwrap()).unwrap();
        assert!(matches!(load_catalog_file(&path), Err(CliError::Catalog(_))));
    }
}
