//! # Price Catalog
//!
//! The static pricing parameters the engine reads: per-kind base prices,
//! material and glazing multipliers, flat feature prices, and size pricing.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PriceCatalog                                    │
//! │                                                                         │
//! │  windows ─────► "single-hung" → { $250.00, ×1.0 }                      │
//! │                 "casement"    → { $350.00, ×1.0 }  ...                 │
//! │  doors   ─────► "entry"       → { $800.00, ×1.2 }                      │
//! │                 "french"      → { $1500.00, ×1.4 } ...                 │
//! │                                                                         │
//! │  materials ───► "wood" → ×1.4        glass_types ──► "double" → ×1.2   │
//! │  features ────► "installation" → $300.00 (flat, additive)              │
//! │                                                                         │
//! │  size_pricing ► $0.50 / sq in, 432 ..= 14400 sq in, 12 ..= 120 in      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Built once (either [`PriceCatalog::standard`] or deserialized by the host
//! from a catalog file, then [`PriceCatalog::validate`]d) and only ever read
//! through `&PriceCatalog` afterwards. Lookups of unknown keys fail with
//! [`UnknownKeyError`]; there are no silent defaults.
//!
//! ## Catalog File Format
//! ```toml
//! [windows.single-hung]
//! base_price_cents = 25000
//! multiplier_bps = 10000
//! label = "Single Hung Window"
//!
//! [materials.wood]
//! multiplier_bps = 14000
//!
//! [features.grids]
//! price_cents = 7500
//! label = "Decorative Grids"
//!
//! [size_pricing]
//! price_per_area_micros = 500000
//! min_area = 432.0
//! max_area = 14400.0
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CatalogError, CatalogResult, UnknownKeyError};
use crate::money::Money;
use crate::types::{AreaRate, CatalogSection, Multiplier, ProductCategory};
use crate::validation::{validate_catalog_key, validate_multiplier, validate_price_cents};

// =============================================================================
// Catalog Entries
// =============================================================================

/// Pricing for one product kind (e.g. a casement window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KindEntry {
    /// Base price in cents before any multiplier.
    pub base_price_cents: i64,

    /// Category multiplier in basis points (10000 = ×1.0).
    pub multiplier_bps: u32,

    /// Display label, e.g. "Entry Door".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl KindEntry {
    /// Returns the base price, or `None` if it exceeds [`Money::MAX_CENTS`].
    #[inline]
    pub fn base_price(&self) -> Option<Money> {
        Money::checked_from_cents(self.base_price_cents)
    }

    /// Returns the category multiplier.
    #[inline]
    pub fn multiplier(&self) -> Multiplier {
        Multiplier::from_bps(self.multiplier_bps)
    }
}

/// A multiplicative option: a frame material or a glazing type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionEntry {
    /// Multiplier in basis points (10000 = ×1.0).
    pub multiplier_bps: u32,

    /// Display label, e.g. "Low-E Triple".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OptionEntry {
    #[inline]
    pub fn multiplier(&self) -> Multiplier {
        Multiplier::from_bps(self.multiplier_bps)
    }
}

/// A flat-priced add-on feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureEntry {
    /// Flat price per unit, in cents.
    pub price_cents: i64,

    /// Display label, e.g. "Professional Installation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FeatureEntry {
    /// Returns the flat price, or `None` if it exceeds [`Money::MAX_CENTS`].
    #[inline]
    pub fn price(&self) -> Option<Money> {
        Money::checked_from_cents(self.price_cents)
    }
}

/// Area-based pricing parameters.
///
/// Area is measured in square inches. `min_area` and `max_area` are
/// inclusive. The optional dimension bounds apply to width and height
/// individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizePricing {
    /// Price per square inch, in millionths of a dollar.
    pub price_per_area_micros: u64,

    /// Smallest accepted area (inclusive).
    pub min_area: f64,

    /// Largest accepted area (inclusive).
    pub max_area: f64,

    /// Smallest accepted width or height, if limited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_dimension: Option<f64>,

    /// Largest accepted width or height, if limited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dimension: Option<f64>,
}

impl SizePricing {
    /// Returns the area rate.
    #[inline]
    pub fn rate(&self) -> AreaRate {
        AreaRate::from_micros(self.price_per_area_micros)
    }

    /// Returns the per-dimension bounds, if either side is limited.
    pub fn dimension_bounds(&self) -> Option<(f64, f64)> {
        match (self.min_dimension, self.max_dimension) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0.0), max.unwrap_or(f64::INFINITY))),
        }
    }

    fn validate(&self) -> CatalogResult<()> {
        let areas_ok = self.min_area.is_finite()
            && self.max_area.is_finite()
            && self.min_area >= 0.0
            && self.min_area < self.max_area;
        if !areas_ok {
            return Err(CatalogError::InvalidAreaBounds {
                min_area: self.min_area,
                max_area: self.max_area,
            });
        }

        if let Some((min, max)) = self.dimension_bounds() {
            let lower_ok = self.min_dimension.map_or(true, |m| m.is_finite() && m > 0.0);
            let upper_ok = self.max_dimension.map_or(true, |m| !m.is_nan() && m > 0.0);
            if !lower_ok || !upper_ok || min >= max {
                return Err(CatalogError::InvalidDimensionBounds { min, max });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Price Catalog
// =============================================================================

/// The full set of pricing tables.
///
/// Sections keep their declaration order, which is the order a host should
/// present options in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceCatalog {
    pub windows: IndexMap<String, KindEntry>,
    pub doors: IndexMap<String, KindEntry>,
    pub materials: IndexMap<String, OptionEntry>,
    pub glass_types: IndexMap<String, OptionEntry>,
    #[serde(default)]
    pub features: IndexMap<String, FeatureEntry>,
    pub size_pricing: SizePricing,
}

impl PriceCatalog {
    /// The standard window & door catalog.
    ///
    /// ## Contents
    /// - 6 window kinds ($250 - $400, ×1.0)
    /// - 4 door kinds ($800 - $1500, ×1.2 - ×1.4)
    /// - 4 materials, 5 glass types, 4 flat-priced features
    /// - $0.50 per sq in, 432 ..= 14400 sq in, each side 12 ..= 120 in
    pub fn standard() -> Self {
        let windows = IndexMap::from([
            kind("single-hung", 250, 10_000, "Single Hung Window"),
            kind("double-hung", 300, 10_000, "Double Hung Window"),
            kind("casement", 350, 10_000, "Casement Window"),
            kind("sliding", 400, 10_000, "Sliding Window"),
            kind("awning", 320, 10_000, "Awning Window"),
            kind("picture", 280, 10_000, "Picture Window"),
        ]);

        let doors = IndexMap::from([
            kind("entry", 800, 12_000, "Entry Door"),
            kind("patio", 1200, 13_000, "Patio Door"),
            kind("french", 1500, 14_000, "French Door"),
            kind("sliding-door", 1000, 12_000, "Sliding Door"),
        ]);

        let materials = IndexMap::from([
            option("vinyl", 10_000, "Vinyl"),
            option("wood", 14_000, "Wood"),
            option("fiberglass", 13_000, "Fiberglass"),
            option("aluminum", 11_000, "Aluminum"),
        ]);

        let glass_types = IndexMap::from([
            option("single", 10_000, "Single Pane"),
            option("double", 12_000, "Double Pane"),
            option("triple", 15_000, "Triple Pane"),
            option("low-e", 14_000, "Low-E"),
            option("low-e-triple", 17_000, "Low-E Triple"),
        ]);

        let features = IndexMap::from([
            feature("grids", 75, "Decorative Grids"),
            feature("hardware", 150, "Premium Hardware"),
            feature("tinting", 100, "UV Protection Tinting"),
            feature("installation", 300, "Professional Installation"),
        ]);

        PriceCatalog {
            windows,
            doors,
            materials,
            glass_types,
            features,
            size_pricing: SizePricing {
                price_per_area_micros: 500_000,
                min_area: 432.0,
                max_area: 14_400.0,
                min_dimension: Some(12.0),
                max_dimension: Some(120.0),
            },
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Returns the kinds offered in a category.
    pub fn kinds(&self, category: ProductCategory) -> &IndexMap<String, KindEntry> {
        match category {
            ProductCategory::Window => &self.windows,
            ProductCategory::Door => &self.doors,
        }
    }

    /// Looks up a product kind within its category.
    pub fn kind(&self, category: ProductCategory, key: &str) -> Result<&KindEntry, UnknownKeyError> {
        self.kinds(category)
            .get(key)
            .ok_or_else(|| UnknownKeyError::new(key, category.section()))
    }

    /// Looks up a frame material.
    pub fn material(&self, key: &str) -> Result<&OptionEntry, UnknownKeyError> {
        self.materials
            .get(key)
            .ok_or_else(|| UnknownKeyError::new(key, CatalogSection::Materials))
    }

    /// Looks up a glazing type.
    pub fn glass_type(&self, key: &str) -> Result<&OptionEntry, UnknownKeyError> {
        self.glass_types
            .get(key)
            .ok_or_else(|| UnknownKeyError::new(key, CatalogSection::GlassTypes))
    }

    /// Looks up an add-on feature.
    pub fn feature(&self, key: &str) -> Result<&FeatureEntry, UnknownKeyError> {
        self.features
            .get(key)
            .ok_or_else(|| UnknownKeyError::new(key, CatalogSection::Features))
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks the catalog's own invariants.
    ///
    /// ## Rules
    /// - every multiplier > 0
    /// - every base / flat price in 0 ..= Money::MAX_CENTS
    /// - 0 <= min_area < max_area; dimension bounds, if any, ordered
    /// - windows, doors, materials and glass types each have an entry
    /// - no blank keys
    ///
    /// Features may be empty: an order simply can't select any.
    pub fn validate(&self) -> CatalogResult<()> {
        for category in ProductCategory::ALL {
            let section = category.section();
            let kinds = self.kinds(category);
            if kinds.is_empty() {
                return Err(CatalogError::EmptySection(section));
            }
            for (key, entry) in kinds {
                validate_catalog_key(section, key)?;
                validate_price_cents(section, key, entry.base_price_cents)?;
                validate_multiplier(section, key, entry.multiplier())?;
            }
        }

        for (section, options) in [
            (CatalogSection::Materials, &self.materials),
            (CatalogSection::GlassTypes, &self.glass_types),
        ] {
            if options.is_empty() {
                return Err(CatalogError::EmptySection(section));
            }
            for (key, entry) in options {
                validate_catalog_key(section, key)?;
                validate_multiplier(section, key, entry.multiplier())?;
            }
        }

        for (key, entry) in &self.features {
            validate_catalog_key(CatalogSection::Features, key)?;
            validate_price_cents(CatalogSection::Features, key, entry.price_cents)?;
        }

        self.size_pricing.validate()
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        PriceCatalog::standard()
    }
}

fn kind(key: &str, base_dollars: i64, multiplier_bps: u32, label: &str) -> (String, KindEntry) {
    (
        key.to_string(),
        KindEntry {
            base_price_cents: Money::from_dollars(base_dollars).cents(),
            multiplier_bps,
            label: Some(label.to_string()),
        },
    )
}

fn option(key: &str, multiplier_bps: u32, label: &str) -> (String, OptionEntry) {
    (
        key.to_string(),
        OptionEntry {
            multiplier_bps,
            label: Some(label.to_string()),
        },
    )
}

fn feature(key: &str, price_dollars: i64, label: &str) -> (String, FeatureEntry) {
    (
        key.to_string(),
        FeatureEntry {
            price_cents: Money::from_dollars(price_dollars).cents(),
            label: Some(label.to_string()),
        },
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = PriceCatalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.windows.len(), 6);
        assert_eq!(catalog.doors.len(), 4);
        assert_eq!(catalog.materials.len(), 4);
        assert_eq!(catalog.glass_types.len(), 5);
        assert_eq!(catalog.features.len(), 4);
    }

    #[test]
    fn test_lookups() {
        let catalog = PriceCatalog::standard();

        let entry = catalog.kind(ProductCategory::Door, "entry").unwrap();
        assert_eq!(entry.base_price(), Some(Money::from_dollars(800)));
        assert_eq!(entry.multiplier(), Multiplier::from_bps(12_000));

        assert_eq!(
            catalog.material("wood").unwrap().multiplier(),
            Multiplier::from_bps(14_000)
        );
        assert_eq!(
            catalog.feature("installation").unwrap().price(),
            Some(Money::from_dollars(300))
        );
    }

    #[test]
    fn test_kind_lookup_is_scoped_to_category() {
        let catalog = PriceCatalog::standard();
        let err = catalog.kind(ProductCategory::Window, "entry").unwrap_err();
        assert_eq!(err.key, "entry");
        assert_eq!(err.section, CatalogSection::Windows);
    }

    #[test]
    fn test_unknown_keys_name_their_section() {
        let catalog = PriceCatalog::standard();
        assert_eq!(
            catalog.material("titanium").unwrap_err().section,
            CatalogSection::Materials
        );
        assert_eq!(
            catalog.glass_type("quad").unwrap_err().section,
            CatalogSection::GlassTypes
        );
        assert_eq!(
            catalog.feature("doorbell").unwrap_err().section,
            CatalogSection::Features
        );
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let catalog = PriceCatalog::standard();
        let keys: Vec<&str> = catalog.doors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["entry", "patio", "french", "sliding-door"]);
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let mut catalog = PriceCatalog::standard();
        catalog.materials.get_mut("wood").unwrap().multiplier_bps = 0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NonPositiveMultiplier { section: CatalogSection::Materials, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut catalog = PriceCatalog::standard();
        catalog.features.get_mut("grids").unwrap().price_cents = -1;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unrepresentable_price() {
        let mut catalog = PriceCatalog::standard();
        catalog.doors.get_mut("entry").unwrap().base_price_cents = 4_000_000_000_000_000_000;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::PriceTooLarge { section: CatalogSection::Doors, .. })
        ));
        assert_eq!(catalog.kind(ProductCategory::Door, "entry").unwrap().base_price(), None);
    }

    #[test]
    fn test_validate_rejects_inverted_area_bounds() {
        let mut catalog = PriceCatalog::standard();
        catalog.size_pricing.min_area = 14_400.0;
        catalog.size_pricing.max_area = 432.0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidAreaBounds { .. })
        ));

        catalog.size_pricing.min_area = 100.0;
        catalog.size_pricing.max_area = 100.0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_dimension_bounds() {
        let mut catalog = PriceCatalog::standard();
        catalog.size_pricing.min_dimension = Some(120.0);
        catalog.size_pricing.max_dimension = Some(12.0);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidDimensionBounds { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_sections() {
        let mut catalog = PriceCatalog::standard();
        catalog.glass_types.clear();
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptySection(CatalogSection::GlassTypes))
        );

        let mut catalog = PriceCatalog::standard();
        catalog.features.clear();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_dimension_bounds() {
        let mut size = PriceCatalog::standard().size_pricing;
        assert_eq!(size.dimension_bounds(), Some((12.0, 120.0)));

        size.max_dimension = None;
        assert_eq!(size.dimension_bounds(), Some((12.0, f64::INFINITY)));

        size.min_dimension = None;
        assert_eq!(size.dimension_bounds(), None);
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = PriceCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: PriceCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
