//! # Pricing Engine
//!
//! `compute_price` turns an [`OrderSpec`] into a [`PriceBreakdown`] using a
//! [`PriceCatalog`]. It is pure: no I/O, no shared mutable state, same input
//! → same output. Any number of callers may share one catalog.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         compute_price()                                 │
//! │                                                                         │
//! │  1. Resolve keys ──── kind / material / glass / features               │
//! │        │               unknown? → UnknownKeyError (nothing priced)     │
//! │        ▼                                                                │
//! │  2. Validate ──────── width, height, area bounds, quantity             │
//! │        │               violated? → ValidationError (nothing priced)    │
//! │        ▼                                                                │
//! │  3. size_price   = area × rate                                         │
//! │  4. list_price   = base × category                                     │
//! │     before_glass = list_price × material                               │
//! │     base_price   = before_glass × glass                                │
//! │  5. surcharges   = differences along that chain                        │
//! │  6. features     = flat prices, first-selected order, no repeats       │
//! │  7. unit         = base_price + size_price + Σ features                │
//! │  8. total        = unit × quantity                                     │
//! │                                                                         │
//! │  Any step that would overflow → ValidationError::AmountTooLarge        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Multipliers compound onto the base price only; the size component is
//! never multiplied.

use tracing::debug;

use crate::breakdown::{FeatureCharge, PriceBreakdown};
use crate::catalog::PriceCatalog;
use crate::error::{PricingError, PricingResult, ValidationError};
use crate::money::Money;
use crate::order::OrderSpec;
use crate::validation::{validate_area, validate_dimension, validate_quantity};

/// Prices an order against a catalog.
///
/// ## Errors
/// - [`PricingError::UnknownKey`] if the kind, material, glass type or any
///   feature is missing from the catalog
/// - [`PricingError::Validation`] if a dimension is non-positive or out of
///   bounds, the area is outside `[min_area, max_area]`, the quantity is 0,
///   or a component (typically `unit × quantity`) leaves the `i64` micro
///   range
///
/// ## Example
/// ```rust
/// use fenestra_core::{compute_price, Money, OrderSpec, PriceCatalog, ProductCategory};
///
/// let catalog = PriceCatalog::standard();
/// let spec = OrderSpec::new(ProductCategory::Window, "single-hung", 36.0, 60.0, "wood", "double");
///
/// let quote = compute_price(&spec, &catalog).unwrap();
/// assert_eq!(quote.base_price, Money::from_dollars(420));
/// assert_eq!(quote.size_price, Money::from_dollars(1080));
/// assert_eq!(quote.total_price, Money::from_dollars(1500));
/// ```
pub fn compute_price(spec: &OrderSpec, catalog: &PriceCatalog) -> PricingResult<PriceBreakdown> {
    match price_order(spec, catalog) {
        Ok(breakdown) => {
            debug!(
                category = %breakdown.category,
                kind = %breakdown.kind,
                area = breakdown.area,
                base = %breakdown.base_price,
                size = %breakdown.size_price,
                unit = %breakdown.single_unit_price,
                quantity = breakdown.quantity,
                total = %breakdown.total_price,
                "Order priced"
            );
            Ok(breakdown)
        }
        Err(e) => {
            debug!(category = %spec.category, kind = %spec.kind, error = %e, "Order rejected");
            Err(e)
        }
    }
}

fn price_order(spec: &OrderSpec, catalog: &PriceCatalog) -> Result<PriceBreakdown, PricingError> {
    // -------------------------------------------------------------------------
    // Resolve every key before touching any numbers
    // -------------------------------------------------------------------------
    let kind = catalog.kind(spec.category, &spec.kind)?;
    let material = catalog.material(&spec.material)?;
    let glass = catalog.glass_type(&spec.glass_type)?;

    let features = spec
        .selected_features()
        .into_iter()
        .map(|key| catalog.feature(key).map(|entry| (key, entry)))
        .collect::<Result<Vec<_>, _>>()?;

    // -------------------------------------------------------------------------
    // Numeric preconditions
    // -------------------------------------------------------------------------
    let size = &catalog.size_pricing;
    let bounds = size.dimension_bounds();
    validate_dimension("width", spec.width, bounds)?;
    validate_dimension("height", spec.height, bounds)?;

    let area = spec.area();
    validate_area(area, size.min_area, size.max_area)?;
    validate_quantity(spec.quantity)?;

    // -------------------------------------------------------------------------
    // Money (every step checked)
    // -------------------------------------------------------------------------
    let size_price = Money::for_area(area, size.rate()).ok_or_else(|| too_large("size price"))?;

    let list_price = kind
        .base_price()
        .and_then(|base| base.apply_multiplier(kind.multiplier()))
        .ok_or_else(|| too_large("list price"))?;
    let before_glass = list_price
        .apply_multiplier(material.multiplier())
        .ok_or_else(|| too_large("material price"))?;
    let base_price = before_glass
        .apply_multiplier(glass.multiplier())
        .ok_or_else(|| too_large("base price"))?;

    let material_surcharge = before_glass
        .checked_sub(list_price)
        .ok_or_else(|| too_large("material surcharge"))?;
    let glass_surcharge = base_price
        .checked_sub(before_glass)
        .ok_or_else(|| too_large("glass surcharge"))?;

    let feature_charges = features
        .into_iter()
        .map(|(key, entry)| {
            entry
                .price()
                .map(|price| FeatureCharge {
                    feature: key.to_string(),
                    price,
                })
                .ok_or_else(|| too_large("feature price"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let feature_total = Money::checked_sum(feature_charges.iter().map(|c| c.price))
        .ok_or_else(|| too_large("feature total"))?;

    let single_unit_price = Money::checked_sum([base_price, size_price, feature_total])
        .ok_or_else(|| too_large("unit price"))?;
    let total_price = single_unit_price
        .multiply_quantity(spec.quantity)
        .ok_or_else(|| too_large("total price"))?;

    Ok(PriceBreakdown {
        category: spec.category,
        kind: spec.kind.clone(),
        width: spec.width,
        height: spec.height,
        area,
        material: spec.material.clone(),
        glass_type: spec.glass_type.clone(),
        material_multiplier: material.multiplier(),
        glass_multiplier: glass.multiplier(),
        list_price,
        material_surcharge,
        glass_surcharge,
        base_price,
        size_price,
        feature_charges,
        feature_total,
        single_unit_price,
        quantity: spec.quantity,
        total_price,
    })
}

fn too_large(component: &str) -> PricingError {
    ValidationError::AmountTooLarge {
        component: component.to_string(),
    }
    .into()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CatalogSection, ProductCategory};

    fn window(material: &str, glass: &str) -> OrderSpec {
        OrderSpec::new(ProductCategory::Window, "single-hung", 36.0, 60.0, material, glass)
    }

    #[test]
    fn test_basic_window() {
        let catalog = PriceCatalog::standard();
        let quote = compute_price(&window("vinyl", "single"), &catalog).unwrap();

        assert_eq!(quote.area, 2160.0);
        assert_eq!(quote.size_price, Money::from_dollars(1080));
        assert_eq!(quote.base_price, Money::from_dollars(250));
        assert_eq!(quote.single_unit_price, Money::from_dollars(1330));
        assert_eq!(quote.total_price, Money::from_dollars(1330));
        assert!(quote.feature_charges.is_empty());
        assert!(quote.is_reconciled());
    }

    #[test]
    fn test_material_and_glass_compound_on_base_only() {
        let catalog = PriceCatalog::standard();
        let quote = compute_price(&window("wood", "double"), &catalog).unwrap();

        assert_eq!(quote.list_price, Money::from_dollars(250));
        assert_eq!(quote.material_surcharge, Money::from_dollars(100)); // 250 → 350
        assert_eq!(quote.glass_surcharge, Money::from_dollars(70)); // 350 → 420
        assert_eq!(quote.base_price, Money::from_dollars(420));
        assert_eq!(quote.size_price, Money::from_dollars(1080));
        assert_eq!(quote.single_unit_price, Money::from_dollars(1500));
        assert_eq!(quote.total_price, Money::from_dollars(1500));
        assert!(quote.is_reconciled());
    }

    #[test]
    fn test_door_with_features_and_quantity() {
        let catalog = PriceCatalog::standard();
        let spec = OrderSpec::new(ProductCategory::Door, "entry", 36.0, 80.0, "vinyl", "single")
            .with_features(["hardware", "installation"])
            .with_quantity(2);

        let quote = compute_price(&spec, &catalog).unwrap();
        assert_eq!(quote.base_price, Money::from_dollars(960));
        assert_eq!(quote.size_price, Money::from_dollars(1440));
        assert_eq!(quote.feature_total, Money::from_dollars(450));
        assert_eq!(quote.single_unit_price, Money::from_dollars(2850));
        assert_eq!(quote.total_price, Money::from_dollars(5700));
        assert!(quote.is_reconciled());
    }

    #[test]
    fn test_unknown_material() {
        let catalog = PriceCatalog::standard();
        let err = compute_price(&window("titanium", "single"), &catalog).unwrap_err();
        match err {
            PricingError::UnknownKey(e) => {
                assert_eq!(e.key, "titanium");
                assert_eq!(e.section, CatalogSection::Materials);
            }
            other => panic!("expected UnknownKey, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_feature() {
        let catalog = PriceCatalog::standard();
        let spec = window("vinyl", "single").with_features(["grids", "doorbell"]);
        let err = compute_price(&spec, &catalog).unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnknownKey(ref e) if e.key == "doorbell" && e.section == CatalogSection::Features
        ));
    }

    #[test]
    fn test_unknown_kind_in_wrong_category() {
        let catalog = PriceCatalog::standard();
        let spec = OrderSpec::new(ProductCategory::Door, "casement", 36.0, 80.0, "vinyl", "single");
        let err = compute_price(&spec, &catalog).unwrap_err();
        assert!(matches!(
            err,
            PricingError::UnknownKey(ref e) if e.section == CatalogSection::Doors
        ));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let catalog = PriceCatalog::standard();

        let mut spec = window("vinyl", "single");
        spec.width = 0.0;
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::MustBePositive { .. }))
        ));

        let spec = window("vinyl", "single").with_quantity(0);
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::MustBePositive { .. }))
        ));

        // Both sides within 12..=120 but the area is below 432
        let mut spec = window("vinyl", "single");
        spec.width = 12.0;
        spec.height = 30.0;
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::AreaOutOfRange { .. }))
        ));

        let mut spec = window("vinyl", "single");
        spec.height = 121.0;
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_duplicate_features_are_ignored() {
        let catalog = PriceCatalog::standard();
        let once = window("vinyl", "single").with_features(["grids"]);
        let twice = window("vinyl", "single").with_features(["grids", "grids"]);
        assert_eq!(
            compute_price(&once, &catalog).unwrap(),
            compute_price(&twice, &catalog).unwrap()
        );
    }

    #[test]
    fn test_feature_order_follows_input() {
        let catalog = PriceCatalog::standard();
        let spec = window("vinyl", "single").with_features(["installation", "grids"]);
        let quote = compute_price(&spec, &catalog).unwrap();
        let order: Vec<&str> = quote
            .feature_charges
            .iter()
            .map(|c| c.feature.as_str())
            .collect();
        assert_eq!(order, vec!["installation", "grids"]);
    }

    #[test]
    fn test_fractional_multipliers_still_reconcile() {
        let catalog = PriceCatalog::standard();
        // $1500 × 1.4 × 1.1 × 1.7 leaves odd cents at every step
        let spec = OrderSpec::new(ProductCategory::Door, "french", 37.25, 81.5, "aluminum", "low-e-triple");
        let quote = compute_price(&spec, &catalog).unwrap();
        assert!(quote.is_reconciled());
    }

    #[test]
    fn test_large_quantities_are_priced() {
        let catalog = PriceCatalog::standard();
        let quote = compute_price(&window("vinyl", "single").with_quantity(1000), &catalog).unwrap();
        assert_eq!(quote.total_price, Money::from_dollars(1_330_000));
        assert!(quote.is_reconciled());
    }

    #[test]
    fn test_unrepresentable_total_is_rejected() {
        let catalog = PriceCatalog::standard();
        // $2,850 a unit, about 4.3 billion units
        let spec = OrderSpec::new(ProductCategory::Door, "entry", 36.0, 80.0, "vinyl", "single")
            .with_features(["hardware", "installation"])
            .with_quantity(u32::MAX);
        match compute_price(&spec, &catalog) {
            Err(PricingError::Validation(ValidationError::AmountTooLarge { component })) => {
                assert_eq!(component, "total price")
            }
            other => panic!("expected AmountTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_catalog_price_never_wraps() {
        // Passes validate(), but × 3.0 no longer fits in i64 micros
        let mut catalog = PriceCatalog::standard();
        let entry = catalog.doors.get_mut("entry").unwrap();
        entry.base_price_cents = 400_000_000_000_000;
        entry.multiplier_bps = 30_000;
        assert!(catalog.validate().is_ok());

        let spec = OrderSpec::new(ProductCategory::Door, "entry", 36.0, 80.0, "vinyl", "single");
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::AmountTooLarge { .. }))
        ));

        // An unvalidated catalog is caught too
        catalog.doors.get_mut("entry").unwrap().base_price_cents = 4_000_000_000_000_000_000;
        assert!(matches!(
            compute_price(&spec, &catalog),
            Err(PricingError::Validation(ValidationError::AmountTooLarge { .. }))
        ));
    }

    #[test]
    fn test_sub_cent_area_change_raises_price() {
        let catalog = PriceCatalog::standard();
        let base = compute_price(&window("vinyl", "single"), &catalog).unwrap();

        let mut wider = window("vinyl", "single");
        wider.width = 36.00001;
        let wider = compute_price(&wider, &catalog).unwrap();

        assert!(wider.size_price > base.size_price);
        assert!(wider.single_unit_price > base.single_unit_price);
    }

    #[test]
    fn test_size_price_matches_area_times_rate() {
        let catalog = PriceCatalog::standard();
        let spec = OrderSpec::new(ProductCategory::Window, "picture", 37.25, 81.5, "vinyl", "single");
        let quote = compute_price(&spec, &catalog).unwrap();

        let exact = quote.area * catalog.size_pricing.rate().dollars();
        let actual = quote.size_price.micros() as f64 / 1_000_000.0;
        assert!(((actual - exact) / exact).abs() < 1e-6);
    }
}
