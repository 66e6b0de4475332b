//! Rendering quotes and catalogs for the terminal.

use fenestra_core::format::{
    breakdown_lines, feature_label, format_currency, format_multiplier_percent, glass_label,
    kind_label, material_label, total_line, BreakdownLine,
};
use fenestra_core::{Money, PriceBreakdown, PriceCatalog, ProductCategory};
use serde::Serialize;

use crate::error::CliResult;

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
struct QuoteDocument<'a> {
    breakdown: &'a PriceBreakdown,
    lines: Vec<BreakdownLine>,
    total: BreakdownLine,
    total_formatted: String,
}

/// Renders a quote as aligned text lines.
pub fn render_text(breakdown: &PriceBreakdown, catalog: &PriceCatalog) -> String {
    let mut lines = breakdown_lines(breakdown, catalog);
    let total = total_line(breakdown);

    let width = lines
        .iter()
        .chain(std::iter::once(&total))
        .map(|line| line.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for line in lines.drain(..) {
        out.push_str(&format!(
            "{:<width$}  {:>14}\n",
            line.label,
            line.formatted_amount()
        ));
    }
    out.push_str(&format!("{}\n", "-".repeat(width + 16)));
    out.push_str(&format!(
        "{:<width$}  {:>14}\n",
        total.label,
        total.formatted_amount()
    ));
    out
}

/// Renders a quote as pretty JSON: the raw breakdown plus its display lines.
pub fn render_json(breakdown: &PriceBreakdown, catalog: &PriceCatalog) -> CliResult<String> {
    let total = total_line(breakdown);
    let document = QuoteDocument {
        breakdown,
        lines: breakdown_lines(breakdown, catalog),
        total_formatted: total.formatted_amount(),
        total,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Lists every selectable option in the catalog.
pub fn render_catalog(catalog: &PriceCatalog) -> String {
    let mut out = String::new();

    for category in ProductCategory::ALL {
        out.push_str(&format!("{}s:\n", category.noun()));
        for (key, entry) in catalog.kinds(category) {
            out.push_str(&format!(
                "  {:<16} {:<24} {} × {}\n",
                key,
                kind_label(catalog, category, key),
                format_catalog_price(entry.base_price()),
                format_multiplier_percent(entry.multiplier())
            ));
        }
    }

    out.push_str("Materials:\n");
    for (key, entry) in &catalog.materials {
        out.push_str(&format!(
            "  {:<16} {:<24} {}\n",
            key,
            material_label(catalog, key),
            format_multiplier_percent(entry.multiplier())
        ));
    }

    out.push_str("Glass types:\n");
    for (key, entry) in &catalog.glass_types {
        out.push_str(&format!(
            "  {:<16} {:<24} {}\n",
            key,
            glass_label(catalog, key),
            format_multiplier_percent(entry.multiplier())
        ));
    }

    out.push_str("Features:\n");
    for (key, entry) in &catalog.features {
        out.push_str(&format!(
            "  {:<16} {:<24} {}\n",
            key,
            feature_label(catalog, key),
            format_catalog_price(entry.price())
        ));
    }

    let size = &catalog.size_pricing;
    out.push_str(&format!(
        "Size: ${:.4} per sq in, {} to {} sq in",
        size.rate().dollars(),
        size.min_area,
        size.max_area
    ));
    if let Some((min, max)) = size.dimension_bounds() {
        out.push_str(&format!(", each side {} to {} in", min, max));
    }
    out.push('\n');
    out
}

/// Catalog prices beyond the representable range are shown, not hidden.
fn format_catalog_price(price: Option<Money>) -> String {
    price.map_or_else(|| "(out of range)".to_string(), format_currency)
}
