//! # Price Breakdown
//!
//! The output of the pricing engine: every component of a quote, in
//! micro-dollars.
//!
//! ## How the Numbers Fit Together
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   list_price            (kind base × category multiplier)              │
//! │ + material_surcharge    (what the frame material adds)                 │
//! │ + glass_surcharge       (what the glazing adds)                        │
//! │ ─────────────────────                                                  │
//! │ = base_price                                                           │
//! │ + size_price            (area × rate, never multiplied)                │
//! │ + Σ feature_charges     (flat, additive)                               │
//! │ ─────────────────────                                                  │
//! │ = single_unit_price                                                    │
//! │ × quantity                                                             │
//! │ ─────────────────────                                                  │
//! │ = total_price                                                          │
//! │                                                                         │
//! │  All three equalities hold exactly (integer micros).                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Multiplier, ProductCategory};

/// One selected feature and its flat per-unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureCharge {
    pub feature: String,
    pub price: Money,
}

/// An itemized quote for one product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    // -------------------------------------------------------------------------
    // Echo of the priced selections (for labeling)
    // -------------------------------------------------------------------------
    pub category: ProductCategory,
    pub kind: String,
    pub width: f64,
    pub height: f64,
    /// Square inches.
    pub area: f64,
    pub material: String,
    pub glass_type: String,
    pub material_multiplier: Multiplier,
    pub glass_multiplier: Multiplier,

    // -------------------------------------------------------------------------
    // Money
    // -------------------------------------------------------------------------
    /// Kind base price after the category multiplier.
    pub list_price: Money,
    /// Amount the material multiplier adds to `list_price`.
    pub material_surcharge: Money,
    /// Amount the glass multiplier adds on top of the material-adjusted price.
    pub glass_surcharge: Money,
    /// Fully compounded base: list × material × glass.
    pub base_price: Money,
    /// Area-based component.
    pub size_price: Money,
    /// Features in first-selected order.
    pub feature_charges: Vec<FeatureCharge>,
    /// Sum of `feature_charges`.
    pub feature_total: Money,
    pub single_unit_price: Money,
    pub quantity: u32,
    pub total_price: Money,
}

impl PriceBreakdown {
    /// Whether the quote covers more than one unit.
    ///
    /// Hosts use this to decide whether a separate per-unit line is shown.
    #[inline]
    pub fn has_multiple_units(&self) -> bool {
        self.quantity > 1
    }

    /// Checks the additive decomposition of the quote.
    ///
    /// Always true for breakdowns produced by the engine.
    pub fn is_reconciled(&self) -> bool {
        let base = Money::checked_sum([
            self.list_price,
            self.material_surcharge,
            self.glass_surcharge,
        ]);
        let features = Money::checked_sum(self.feature_charges.iter().map(|c| c.price));
        let unit = Money::checked_sum([self.base_price, self.size_price, self.feature_total]);
        let total = self.single_unit_price.multiply_quantity(self.quantity);

        base == Some(self.base_price)
            && features == Some(self.feature_total)
            && unit == Some(self.single_unit_price)
            && total == Some(self.total_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PriceBreakdown {
        PriceBreakdown {
            category: ProductCategory::Door,
            kind: "entry".to_string(),
            width: 36.0,
            height: 80.0,
            area: 2880.0,
            material: "vinyl".to_string(),
            glass_type: "single".to_string(),
            material_multiplier: Multiplier::ONE,
            glass_multiplier: Multiplier::ONE,
            list_price: Money::from_dollars(960),
            material_surcharge: Money::zero(),
            glass_surcharge: Money::zero(),
            base_price: Money::from_dollars(960),
            size_price: Money::from_dollars(1440),
            feature_charges: vec![
                FeatureCharge {
                    feature: "hardware".to_string(),
                    price: Money::from_dollars(150),
                },
                FeatureCharge {
                    feature: "installation".to_string(),
                    price: Money::from_dollars(300),
                },
            ],
            feature_total: Money::from_dollars(450),
            single_unit_price: Money::from_dollars(2850),
            quantity: 2,
            total_price: Money::from_dollars(5700),
        }
    }

    #[test]
    fn test_is_reconciled() {
        let breakdown = sample();
        assert!(breakdown.is_reconciled());
        assert!(breakdown.has_multiple_units());

        let mut off_by_a_micro = sample();
        off_by_a_micro.total_price = Money::from_micros(off_by_a_micro.total_price.micros() + 1);
        assert!(!off_by_a_micro.is_reconciled());

        let mut stale_features = sample();
        stale_features.feature_charges.pop();
        assert!(!stale_features.is_reconciled());
    }
}
