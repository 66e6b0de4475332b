//! # Display Formatting
//!
//! Pure helpers that turn a [`PriceBreakdown`] into text a host can show.
//!
//! ## Two Independent Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pricing (engine.rs)              │  Formatting (this module)          │
//! │  ─────────────────────            │  ──────────────────────────        │
//! │  Unknown key → UnknownKeyError    │  Unknown key → show the raw key    │
//! │  Integer micro-dollars            │  "$1,330.00"                       │
//! │                                   │                                    │
//! │  A label fallback here can never turn a bad order into a good quote:  │
//! │  by the time a breakdown exists, every key has already been priced.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use fenestra_core::format::{breakdown_lines, format_currency};
//! use fenestra_core::{compute_price, OrderSpec, PriceCatalog, ProductCategory};
//!
//! let catalog = PriceCatalog::standard();
//! let spec = OrderSpec::new(ProductCategory::Window, "casement", 36.0, 60.0, "wood", "double");
//! let quote = compute_price(&spec, &catalog).unwrap();
//!
//! for line in breakdown_lines(&quote, &catalog) {
//!     println!("{line}");
//! }
//! assert_eq!(format_currency(quote.total_price), "$1,668.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::breakdown::PriceBreakdown;
use crate::catalog::PriceCatalog;
use crate::money::Money;
use crate::types::{Multiplier, ProductCategory};

// =============================================================================
// Currency & Numbers
// =============================================================================

/// Formats money as US dollars with digit grouping and two decimals.
///
/// This is the only place an amount is rounded to cents.
///
/// ## Example
/// ```rust
/// use fenestra_core::format::format_currency;
/// use fenestra_core::Money;
///
/// assert_eq!(format_currency(Money::from_dollars(1330)), "$1,330.00");
/// assert_eq!(format_currency(Money::from_micros(-5_500_000)), "-$5.50");
/// // Sub-cent amounts round half away from zero
/// assert_eq!(format_currency(Money::from_micros(1_517_937_500)), "$1,517.94");
/// assert_eq!(format_currency(Money::zero()), "$0.00");
/// ```
pub fn format_currency(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let dollars = amount.dollars().unsigned_abs().to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, amount.cents_part())
}

/// Formats a multiplier as a whole percentage: ×1.4 → "140%".
pub fn format_multiplier_percent(multiplier: Multiplier) -> String {
    format!("{:.0}%", multiplier.percent())
}

/// Formats a linear dimension without trailing zeros: 36.0 → `36"`.
pub fn format_dimension(inches: f64) -> String {
    format!("{}\"", inches)
}

// =============================================================================
// Labels
// =============================================================================

/// Label for a product kind, falling back to the raw key.
pub fn kind_label(catalog: &PriceCatalog, category: ProductCategory, key: &str) -> String {
    catalog
        .kinds(category)
        .get(key)
        .and_then(|entry| entry.label.clone())
        .unwrap_or_else(|| key.to_string())
}

/// Label for a feature, falling back to the raw key.
pub fn feature_label(catalog: &PriceCatalog, key: &str) -> String {
    catalog
        .features
        .get(key)
        .and_then(|entry| entry.label.clone())
        .unwrap_or_else(|| key.to_string())
}

/// Label for a material, falling back to the title-cased key.
pub fn material_label(catalog: &PriceCatalog, key: &str) -> String {
    catalog
        .materials
        .get(key)
        .and_then(|entry| entry.label.clone())
        .unwrap_or_else(|| title_case(key))
}

/// Label for a glass type, falling back to the title-cased key.
pub fn glass_label(catalog: &PriceCatalog, key: &str) -> String {
    catalog
        .glass_types
        .get(key)
        .and_then(|entry| entry.label.clone())
        .unwrap_or_else(|| title_case(key))
}

/// "low-e-triple" → "Low E Triple".
pub fn title_case(key: &str) -> String {
    key.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Breakdown Lines
// =============================================================================

/// One labeled amount in a rendered quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: Money,
}

impl BreakdownLine {
    fn new(label: impl Into<String>, amount: Money) -> Self {
        BreakdownLine {
            label: label.into(),
            amount,
        }
    }

    /// The amount as a currency string.
    pub fn formatted_amount(&self) -> String {
        format_currency(self.amount)
    }
}

impl fmt::Display for BreakdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_amount())
    }
}

/// Projects a breakdown into display lines.
///
/// ## Lines
/// ```text
/// Casement Window (Base)                     $350.00   ← list_price
/// Size Component (36" × 60" = 2160 sq in) $1,080.00
/// Material: Wood (140%)                      $140.00
/// Glass: Double Pane (120%)                   $98.00
/// Decorative Grids                            $75.00   ← one per feature
/// Unit Price (×2)                          $1,743.00   ← only if quantity > 1
/// ```
/// Every line except "Unit Price" is a component of the unit price, and
/// those components sum to it exactly. The total is [`total_line`].
pub fn breakdown_lines(breakdown: &PriceBreakdown, catalog: &PriceCatalog) -> Vec<BreakdownLine> {
    let mut lines = Vec::with_capacity(5 + breakdown.feature_charges.len());

    lines.push(BreakdownLine::new(
        format!(
            "{} (Base)",
            kind_label(catalog, breakdown.category, &breakdown.kind)
        ),
        breakdown.list_price,
    ));

    lines.push(BreakdownLine::new(
        format!(
            "Size Component ({} × {} = {:.0} sq in)",
            format_dimension(breakdown.width),
            format_dimension(breakdown.height),
            breakdown.area
        ),
        breakdown.size_price,
    ));

    lines.push(BreakdownLine::new(
        format!(
            "Material: {} ({})",
            material_label(catalog, &breakdown.material),
            format_multiplier_percent(breakdown.material_multiplier)
        ),
        breakdown.material_surcharge,
    ));

    lines.push(BreakdownLine::new(
        format!(
            "Glass: {} ({})",
            glass_label(catalog, &breakdown.glass_type),
            format_multiplier_percent(breakdown.glass_multiplier)
        ),
        breakdown.glass_surcharge,
    ));

    for charge in &breakdown.feature_charges {
        lines.push(BreakdownLine::new(
            feature_label(catalog, &charge.feature),
            charge.price,
        ));
    }

    if breakdown.has_multiple_units() {
        lines.push(BreakdownLine::new(
            format!("Unit Price (×{})", breakdown.quantity),
            breakdown.single_unit_price,
        ));
    }

    lines
}

/// The grand total line.
pub fn total_line(breakdown: &PriceBreakdown) -> BreakdownLine {
    BreakdownLine::new("Total", breakdown.total_price)
}

// =============================================================================
// Unit Tests
// =============================================================================
