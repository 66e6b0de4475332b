//! # Error Types
//!
//! Domain-specific error types for fenestra-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fenestra-core errors (this file)                                      │
//! │  ├── PricingError     - What compute_price() returns                   │
//! │  │   ├── ValidationError  - A numeric constraint was violated          │
//! │  │   └── UnknownKeyError  - A selection key isn't in the catalog       │
//! │  └── CatalogError     - A catalog breaks its own invariants            │
//! │                                                                         │
//! │  quote-cli errors (host app)                                           │
//! │  └── CliError         - Config, I/O, parse, and the errors above       │
//! │                                                                         │
//! │  Flow: ValidationError/UnknownKeyError → PricingError → CliError       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, bound, key, section)
//! 3. Errors are enum variants, never String
//! 4. Every pricing error is raised before any money is computed

use thiserror::Error;

use crate::types::CatalogSection;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when an order's numbers don't meet the catalog's
/// constraints. They always name the offending field and the bound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    /// Derived area (width × height) is outside the catalog's size bounds.
    ///
    /// ## User Workflow
    /// ```text
    /// Width 10" × Height 40" = 400 sq in
    ///      │
    ///      ▼
    /// Catalog size range: 432 ..= 14400 sq in
    ///      │
    ///      ▼
    /// AreaOutOfRange { area: 400, min: 432, max: 14400 }
    ///      │
    ///      ▼
    /// Host shows: "Please enter dimensions ..."
    /// ```
    #[error("area {area} sq in must be between {min} and {max} sq in")]
    AreaOutOfRange { area: f64, min: f64, max: f64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A price component cannot be represented.
    ///
    /// Only reachable with extreme catalog prices or quantities, e.g. a
    /// unit price of $2,850 ordered 4 billion times.
    #[error("{component} exceeds the largest representable amount")]
    AmountTooLarge { component: String },
}

// =============================================================================
// Unknown Key Error
// =============================================================================

/// A selection key has no entry in the catalog section it was looked up in.
///
/// This is never papered over with a default: a quote for a product the
/// catalog doesn't know how to price would be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key '{key}' in catalog section {section}")]
pub struct UnknownKeyError {
    /// The key that was requested.
    pub key: String,
    /// The section that was searched.
    pub section: CatalogSection,
}

impl UnknownKeyError {
    /// Creates an unknown key error.
    pub fn new(key: impl Into<String>, section: CatalogSection) -> Self {
        UnknownKeyError {
            key: key.into(),
            section,
        }
    }
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by [`crate::engine::compute_price`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The order violates a numeric constraint.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The order references a key the catalog doesn't have.
    #[error("Unknown selection: {0}")]
    UnknownKey(#[from] UnknownKeyError),
}

impl PricingError {
    /// Returns true if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, PricingError::Validation(_))
    }

    /// Returns true if this is an unknown-key failure.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, PricingError::UnknownKey(_))
    }
}

// =============================================================================
// Catalog Error
// =============================================================================

/// A price catalog violates its own invariants.
///
/// ## When This Occurs
/// - A hand-edited catalog file has a zero multiplier, or a price that is
///   negative or too large to represent
/// - The size bounds are inverted
/// - A section the engine always needs is empty
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A multiplier is zero.
    #[error("{section} entry '{key}' has a non-positive multiplier")]
    NonPositiveMultiplier { section: CatalogSection, key: String },

    /// A base or flat price is negative.
    #[error("{section} entry '{key}' has a negative price ({cents} cents)")]
    NegativePrice {
        section: CatalogSection,
        key: String,
        cents: i64,
    },

    /// A base or flat price is beyond what the engine can represent.
    #[error("{section} entry '{key}' has a price above {max} cents ({cents} cents)")]
    PriceTooLarge {
        section: CatalogSection,
        key: String,
        cents: i64,
        max: i64,
    },

    /// Area bounds are not a valid range.
    #[error("size pricing requires 0 <= min_area < max_area (got {min_area} / {max_area})")]
    InvalidAreaBounds { min_area: f64, max_area: f64 },

    /// Dimension bounds are not a valid range.
    #[error("size pricing requires 0 < min_dimension < max_dimension (got {min} / {max})")]
    InvalidDimensionBounds { min: f64, max: f64 },

    /// A section has no entries.
    #[error("catalog section {0} must not be empty")]
    EmptySection(CatalogSection),

    /// A key is blank.
    #[error("catalog section {0} contains a blank key")]
    BlankKey(CatalogSection),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for pricing results.
pub type PricingResult<T> = Result<T, PricingError>;

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message() {
        let err = UnknownKeyError::new("titanium", CatalogSection::Materials);
        assert_eq!(
            err.to_string(),
            "unknown key 'titanium' in catalog section materials"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "width".to_string(),
        };
        assert_eq!(err.to_string(), "width must be positive");

        let err = ValidationError::AreaOutOfRange {
            area: 400.0,
            min: 432.0,
            max: 14400.0,
        };
        assert_eq!(
            err.to_string(),
            "area 400 sq in must be between 432 and 14400 sq in"
        );

        let err = ValidationError::AmountTooLarge {
            component: "total price".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "total price exceeds the largest representable amount"
        );
    }

    #[test]
    fn test_conversions_into_pricing_error() {
        let err: PricingError = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into();
        assert!(err.is_validation());

        let err: PricingError = UnknownKeyError::new("bay", CatalogSection::Windows).into();
        assert!(err.is_unknown_key());
        assert_eq!(
            err.to_string(),
            "Unknown selection: unknown key 'bay' in catalog section windows"
        );
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::NegativePrice {
            section: CatalogSection::Features,
            key: "grids".to_string(),
            cents: -100,
        };
        assert_eq!(
            err.to_string(),
            "features entry 'grids' has a negative price (-100 cents)"
        );
    }
}
