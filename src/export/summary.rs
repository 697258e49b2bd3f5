//! Plain-text layout summary printed by the CLI.

use std::fmt::Write as _;

use crate::keycode::simplify;
use crate::models::Layer;

/// Width of the `=` rule framing the header.
pub const RULE_WIDTH: usize = 60;

/// Formats a per-layer, per-row listing of key labels.
///
/// The text opens with a blank line. Empty cells are dropped from each row;
/// a row with no keys still prints its `Row r:` line.
///
/// ```
/// use keyboard_visualizer::export::summarize;
/// use keyboard_visualizer::models::Layer;
///
/// let layers = vec![Layer::from_tokens(&[&["KC_A", "-1", "KC_LSFT"]])];
/// let text = summarize(&layers);
/// assert!(text.contains("Total Layers: 1"));
/// assert!(text.contains("  Row 0: A | ⇧"));
/// ```
#[must_use]
pub fn summarize(layers: &[Layer]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    let _ = writeln!(output, "\n{rule}");
    output.push_str("Keyboard Layout Summary\n");
    let _ = writeln!(output, "{rule}");
    let _ = writeln!(output, "Total Layers: {}", layers.len());

    for (index, layer) in layers.iter().enumerate() {
        let _ = writeln!(output, "\nLayer {index}:");
        for (row_index, row) in layer.rows.iter().enumerate() {
            let keys: Vec<String> = row
                .iter()
                .filter(|keycode| !keycode.is_empty())
                .map(simplify)
                .collect();
            let _ = writeln!(output, "  Row {row_index}: {}", keys.join(" | "));
        }
    }

    output
}
