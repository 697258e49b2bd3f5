//! Color legend for the interactive view.
//!
//! Lists every key category with its fill/border colors and how many keys of
//! that category appear across the rendered layers.

use std::fmt::Write as _;

use super::interactive::escape_html;
use crate::keycode::{KeyCategory, KeyLabel};
use crate::models::Layer;

/// One legend row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    /// Category described by this row
    pub category: KeyCategory,
    /// Number of non-empty keys in that category
    pub count: usize,
}

/// Counts keys per category, in [`KeyCategory::ALL`] order.
///
/// Categories with no keys are still listed so the legend is stable across
/// layouts.
#[must_use]
pub fn legend_entries(layers: &[Layer]) -> Vec<LegendEntry> {
    let mut counts = [0usize; KeyCategory::ALL.len()];

    for layer in layers {
        for (_, _, keycode) in layer.keys() {
            let category = KeyLabel::of(keycode).category;
            if let Some(slot) = KeyCategory::ALL.iter().position(|c| *c == category) {
                counts[slot] += 1;
            }
        }
    }

    KeyCategory::ALL
        .iter()
        .zip(counts)
        .map(|(&category, count)| LegendEntry { category, count })
        .collect()
}

/// Generates the legend as an HTML `<ul>` fragment.
///
/// ```
/// use keyboard_visualizer::export::color_legend::generate_color_legend;
/// use keyboard_visualizer::models::Layer;
///
/// let layers = vec![Layer::from_tokens(&[&["KC_A", "MO(1)"]])];
/// let legend = generate_color_legend(&layers);
/// assert!(legend.contains("Layer switch"));
/// assert!(legend.contains("#FFCCCC"));
/// ```
#[must_use]
pub fn generate_color_legend(layers: &[Layer]) -> String {
    let mut output = String::from("<ul class=\"legend\">\n");

    for entry in legend_entries(layers) {
        let colors = entry.category.colors();
        let noun = if entry.count == 1 { "key" } else { "keys" };
        let _ = writeln!(
            output,
            "  <li class=\"legend-{slug}\" data-category=\"{slug}\">\
             <span class=\"swatch\" style=\"background:{fill};border-color:{border}\"></span>\
             {name} <small>({fill} / {border}) - {count} {noun}</small></li>",
            slug = entry.category.slug(),
            fill = colors.fill.to_hex(),
            border = colors.border.to_hex(),
            name = escape_html(entry.category.display_name()),
            count = entry.count,
        );
    }

    output.push_str("</ul>\n");
    output
}
