//! # fenestra-core: Pure Pricing Logic for Fenestra Quotes
//!
//! This crate prices custom-manufactured windows and doors. It contains the
//! price catalog, the pricing engine, and the formatting helpers that turn a
//! quote into display lines, all as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fenestra Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host (quote-cli, or any UI runtime)                │   │
//! │  │   collects selections ──► OrderSpec    Breakdown ──► renders    │   │
//! │  └─────────────────────────────┬──────────────────▲────────────────┘   │
//! │                                │                  │                     │
//! │  ┌─────────────────────────────▼──────────────────┴────────────────┐   │
//! │  │               ★ fenestra-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  engine   │  │   money   │  │  format   │  │   │
//! │  │   │  kinds    │─►│ compute_  │  │   Money   │  │ currency  │  │   │
//! │  │   │  options  │  │  price()  │  │ Multiplier│  │  labels   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Price tables (kinds, materials, glass, features, size)
//! - [`order`] - The order specification the engine consumes
//! - [`engine`] - `compute_price`
//! - [`breakdown`] - The itemized quote the engine produces
//! - [`format`] - Currency strings, labels, display lines
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Multiplier, AreaRate, ProductCategory, CatalogSection
//! - [`error`] - Domain error types
//! - [`validation`] - Order and catalog rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Files, network, environment are the host's business
//! 3. **Integer Money**: All monetary values are in micro-dollars, multipliers
//!    in basis points, so breakdown lines add up exactly; every operation
//!    that could overflow is checked
//! 4. **Explicit Errors**: Unknown keys and bad numbers are typed errors,
//!    never defaults
//!
//! ## Example Usage
//!
//! ```rust
//! use fenestra_core::{compute_price, Money, OrderSpec, PriceCatalog, ProductCategory};
//!
//! let catalog = PriceCatalog::standard();
//!
//! let spec = OrderSpec::new(ProductCategory::Door, "entry", 36.0, 80.0, "vinyl", "single")
//!     .with_features(["hardware", "installation"])
//!     .with_quantity(2);
//!
//! let quote = compute_price(&spec, &catalog).unwrap();
//! assert_eq!(quote.single_unit_price, Money::from_dollars(2850));
//! assert_eq!(quote.total_price, Money::from_dollars(5700));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod format;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fenestra_core::Money` instead of
// `use fenestra_core::money::Money`

pub use breakdown::{FeatureCharge, PriceBreakdown};
pub use catalog::{FeatureEntry, KindEntry, OptionEntry, PriceCatalog, SizePricing};
pub use engine::compute_price;
pub use error::{
    CatalogError, CatalogResult, PricingError, PricingResult, UnknownKeyError, ValidationError,
};
pub use money::Money;
pub use order::OrderSpec;
pub use types::*;
