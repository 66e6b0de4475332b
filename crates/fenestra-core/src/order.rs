//! # Order Specification
//!
//! The input to the pricing engine: what the customer picked.
//!
//! An `OrderSpec` is built per request by the host (from a form, CLI flags,
//! or an IPC payload) and is never retained by the core.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ProductCategory;

/// A customer's selections for one quoted product line.
///
/// ## Features Are a Set
/// `features` is an ordered list as far as serialization goes, but the
/// engine treats it as a set: a key repeated later in the list has no
/// effect, and charges appear in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSpec {
    /// Window or door.
    pub category: ProductCategory,

    /// Kind key within the category, e.g. "single-hung" or "entry".
    pub kind: String,

    /// Width in inches.
    pub width: f64,

    /// Height in inches.
    pub height: f64,

    /// Frame material key, e.g. "vinyl".
    pub material: String,

    /// Glazing key, e.g. "double".
    pub glass_type: String,

    /// Selected add-on feature keys.
    #[serde(default)]
    pub features: Vec<String>,

    /// Number of identical units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl OrderSpec {
    /// Creates an order for one unit with no features.
    pub fn new(
        category: ProductCategory,
        kind: impl Into<String>,
        width: f64,
        height: f64,
        material: impl Into<String>,
        glass_type: impl Into<String>,
    ) -> Self {
        OrderSpec {
            category,
            kind: kind.into(),
            width,
            height,
            material: material.into(),
            glass_type: glass_type.into(),
            features: Vec::new(),
            quantity: default_quantity(),
        }
    }

    /// Adds a feature selection.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Replaces the feature selections.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Area in square inches (width × height).
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Feature keys with duplicates removed, in first-occurrence order.
    pub fn selected_features(&self) -> Vec<&str> {
        let mut selected: Vec<&str> = Vec::with_capacity(self.features.len());
        for feature in &self.features {
            if !selected.contains(&feature.as_str()) {
                selected.push(feature);
            }
        }
        selected
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> OrderSpec {
        OrderSpec::new(ProductCategory::Window, "single-hung", 36.0, 60.0, "vinyl", "single")
    }

    #[test]
    fn test_new_defaults() {
        let spec = window();
        assert_eq!(spec.quantity, 1);
        assert!(spec.features.is_empty());
        assert_eq!(spec.area(), 2160.0);
    }

    #[test]
    fn test_selected_features_dedupes_in_input_order() {
        let spec = window().with_features(["tinting", "grids", "tinting", "hardware", "grids"]);
        assert_eq!(spec.selected_features(), vec!["tinting", "grids", "hardware"]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "category": "door",
            "kind": "entry",
            "width": 36.0,
            "height": 80.0,
            "material": "vinyl",
            "glass_type": "single"
        }"#;
        let spec: OrderSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.category, ProductCategory::Door);
        assert_eq!(spec.quantity, 1);
        assert!(spec.features.is_empty());
    }
}
