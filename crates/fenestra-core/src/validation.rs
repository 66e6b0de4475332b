//! # Validation Module
//!
//! Order and catalog validation rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (form, CLI flags)                                       │
//! │  ├── Range-checks dimensions before calling the engine                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine                                               │
//! │  ├── Re-validates everything; never trusts the host                    │
//! │  └── THIS MODULE: dimension, area, quantity rules                      │
//! │                                                                         │
//! │  Catalog load (once, at startup)                                       │
//! │  └── THIS MODULE: multiplier > 0, 0 <= price <= MAX, key not blank     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fenestra_core::validation::{validate_area, validate_quantity};
//!
//! assert!(validate_area(2160.0, 432.0, 14_400.0).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CatalogError, CatalogResult, ValidationError};
use crate::money::Money;
use crate::types::{CatalogSection, Multiplier};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a single linear dimension (width or height).
///
/// ## Rules
/// - Must be finite
/// - Must be positive (> 0)
/// - If the catalog declares per-dimension bounds, must lie within them
///
/// ## Example
/// ```rust
/// use fenestra_core::validation::validate_dimension;
///
/// assert!(validate_dimension("width", 36.0, Some((12.0, 120.0))).is_ok());
/// assert!(validate_dimension("width", 0.0, None).is_err());
/// assert!(validate_dimension("height", 130.0, Some((12.0, 120.0))).is_err());
/// ```
pub fn validate_dimension(
    field: &str,
    value: f64,
    bounds: Option<(f64, f64)>,
) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if let Some((min, max)) = bounds {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min,
                max,
                actual: value,
            });
        }
    }

    Ok(())
}

/// Validates a derived area against the catalog's inclusive size bounds.
///
/// ## Boundary Behavior
/// ```text
///   min_area - 1   min_area          max_area   max_area + 1
///   ─────┼────────────┼──────────────────┼───────────┼──────
///      reject       accept    ...      accept      reject
/// ```
pub fn validate_area(area: f64, min_area: f64, max_area: f64) -> ValidationResult<()> {
    if !area.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "area".to_string(),
        });
    }

    if area < min_area || area > max_area {
        return Err(ValidationError::AreaOutOfRange {
            area,
            min: min_area,
            max: max_area,
        });
    }

    Ok(())
}

/// Validates an order quantity.
///
/// There is no upper limit here. A quantity is only refused later, if
/// `unit × quantity` cannot be represented.
///
/// ## User Workflow
/// ```text
/// User enters quantity: 2
///      │
///      ▼
/// validate_quantity(2) ← THIS FUNCTION
///      │
///      ├── qty == 0?   → Error: "quantity must be positive"
///      │
///      └── OK → total = unit price × 2
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a catalog key is not blank.
pub fn validate_catalog_key(section: CatalogSection, key: &str) -> CatalogResult<()> {
    if key.trim().is_empty() {
        return Err(CatalogError::BlankKey(section));
    }
    Ok(())
}

/// Validates a catalog multiplier is strictly positive.
pub fn validate_multiplier(
    section: CatalogSection,
    key: &str,
    multiplier: Multiplier,
) -> CatalogResult<()> {
    if multiplier.bps() == 0 {
        return Err(CatalogError::NonPositiveMultiplier {
            section,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Validates a catalog price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a feature offered at no charge)
/// - Must not exceed [`Money::MAX_CENTS`]
pub fn validate_price_cents(section: CatalogSection, key: &str, cents: i64) -> CatalogResult<()> {
    if cents < 0 {
        return Err(CatalogError::NegativePrice {
            section,
            key: key.to_string(),
            cents,
        });
    }
    if cents > Money::MAX_CENTS {
        return Err(CatalogError::PriceTooLarge {
            section,
            key: key.to_string(),
            cents,
            max: Money::MAX_CENTS,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
