//! # Domain Types
//!
//! Small value types used throughout the pricing core.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Multiplier    │   │    AreaRate     │   │ ProductCategory │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  micros (u64)   │   │  Window         │       │
//! │  │  14000 = ×1.4   │   │  500000 = $0.50 │   │  Door           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │ CatalogSection  │  Which catalog table a key was looked up in       │
//! │  │  ─────────────  │  (carried by UnknownKeyError)                     │
//! │  │  windows, doors │                                                   │
//! │  │  materials, ... │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Multiplier
// =============================================================================

/// A price multiplier represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.0001 of the price.
/// 10 000 bps = ×1.0 (no change), 14 000 bps = ×1.4 (wood frame).
/// Integer bps keep multiplier math exact down to the micro-dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Basis points that represent ×1.0.
    pub const ONE_BPS: u32 = 10_000;

    /// The identity multiplier.
    pub const ONE: Multiplier = Multiplier(Self::ONE_BPS);

    /// Creates a multiplier from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a percentage: ×1.4 → 140.0 (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Area Rate
// =============================================================================

/// Price per square unit of area, in millionths of a dollar ("micros").
///
/// ## Why Micros?
/// Area rates are routinely fractions of a cent per square inch.
/// 500 000 micros = $0.50 per square inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AreaRate(u64);

impl AreaRate {
    /// Creates a rate from micros per square unit.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        AreaRate(micros)
    }

    /// Returns the rate in micros.
    #[inline]
    pub const fn micros(&self) -> u64 {
        self.0
    }

    /// Returns the rate in dollars (for display only).
    #[inline]
    pub fn dollars(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// The top-level product family being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Windows: single-hung, casement, picture, ...
    Window,
    /// Doors: entry, patio, french, ...
    Door,
}

impl ProductCategory {
    /// All categories, in display order.
    pub const ALL: [ProductCategory; 2] = [ProductCategory::Window, ProductCategory::Door];

    /// The catalog section that holds this category's kinds.
    pub const fn section(&self) -> CatalogSection {
        match self {
            ProductCategory::Window => CatalogSection::Windows,
            ProductCategory::Door => CatalogSection::Doors,
        }
    }

    /// Human-readable noun used in labels ("Window", "Door").
    pub const fn noun(&self) -> &'static str {
        match self {
            ProductCategory::Window => "Window",
            ProductCategory::Door => "Door",
        }
    }
}

impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Window
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Window => write!(f, "window"),
            ProductCategory::Door => write!(f, "door"),
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "window" | "windows" => Ok(ProductCategory::Window),
            "door" | "doors" => Ok(ProductCategory::Door),
            _ => Err(ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: vec!["window".to_string(), "door".to_string()],
            }),
        }
    }
}

// =============================================================================
// Catalog Section
// =============================================================================

/// A lookup table within the price catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSection {
    Windows,
    Doors,
    Materials,
    GlassTypes,
    Features,
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogSection::Windows => "windows",
            CatalogSection::Doors => "doors",
            CatalogSection::Materials => "materials",
            CatalogSection::GlassTypes => "glass_types",
            CatalogSection::Features => "features",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
