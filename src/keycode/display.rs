//! Short display labels for keycodes.
//!
//! Labels are what gets printed inside a key: the `KC_` prefix is dropped and
//! the common modifier names are folded into single glyphs.

use crate::models::{Keycode, EMPTY_TOKEN};

/// Prefix carried by basic QMK keycodes.
pub const KEYCODE_PREFIX: &str = "KC_";

/// Glyph shown for transparent keys.
pub const TRANSPARENT_GLYPH: &str = "▽";

/// Glyph shown for no-op keys.
pub const NO_OP_GLYPH: &str = "✗";

/// Modifier glyphs whose presence marks a modifier combo.
pub const MODIFIER_GLYPHS: [&str; 4] = ["⇧", "⌃", "⌥", "⌘"];

/// Substring replacements, applied once each and in this order.
///
/// Every rule sees the output of the rules before it, but a rule is never
/// revisited, so a glyph can't be re-matched by a later entry.
pub const GLYPH_REPLACEMENTS: [(&str, &str); 8] = [
    ("LSFT", "⇧"),
    ("LCTL", "⌃"),
    ("LALT", "⌥"),
    ("LGUI", "⌘"),
    ("RSHIFT", "R⇧"),
    ("RCTRL", "R⌃"),
    ("TRNS", TRANSPARENT_GLYPH),
    ("NO", NO_OP_GLYPH),
];

/// Returns the display label for a keycode.
///
/// The empty sentinel has an empty label.
#[must_use]
pub fn simplify(keycode: &Keycode) -> String {
    match keycode {
        Keycode::Empty => String::new(),
        Keycode::Code(code) => simplify_token(code),
    }
}

/// Returns the display label for a raw token string.
///
/// # Examples
///
/// ```
/// use keyboard_visualizer::keycode::simplify_token;
///
/// assert_eq!(simplify_token("KC_A"), "A");
/// assert_eq!(simplify_token("KC_LSFT"), "⇧");
/// assert_eq!(simplify_token("LCTL(KC_C)"), "⌃(KC_C)");
/// assert_eq!(simplify_token("-1"), "");
/// ```
#[must_use]
pub fn simplify_token(token: &str) -> String {
    if token == EMPTY_TOKEN {
        return String::new();
    }

    let stripped = token.strip_prefix(KEYCODE_PREFIX).unwrap_or(token);

    GLYPH_REPLACEMENTS
        .iter()
        .fold(stripped.to_string(), |label, (from, to)| label.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_forms_have_empty_label() {
        assert_eq!(simplify(&Keycode::Empty), "");
        assert_eq!(simplify_token("-1"), "");
        assert_eq!(simplify(&Keycode::from("-1")), "");
    }

    #[test]
    fn test_prefix_is_stripped_once() {
        assert_eq!(simplify_token("KC_ESC"), "ESC");
        assert_eq!(simplify_token("KC_KC_A"), "KC_A");
        assert_eq!(simplify_token("MO(1)"), "MO(1)");
    }

    #[test]
    fn test_modifier_glyphs() {
        assert_eq!(simplify_token("KC_LSFT"), "⇧");
        assert_eq!(simplify_token("KC_LCTL"), "⌃");
        assert_eq!(simplify_token("KC_LALT"), "⌥");
        assert_eq!(simplify_token("KC_LGUI"), "⌘");
        assert_eq!(simplify_token("KC_RSHIFT"), "R⇧");
        assert_eq!(simplify_token("KC_RCTRL"), "R⌃");
    }

    #[test]
    fn test_transparent_and_no_op() {
        assert_eq!(simplify_token("KC_TRNS"), TRANSPARENT_GLYPH);
        assert_eq!(simplify_token("KC_NO"), NO_OP_GLYPH);
    }

    #[test]
    fn test_replacements_apply_inside_wrappers() {
        // only the leading prefix is stripped
        assert_eq!(simplify_token("LSFT(KC_1)"), "⇧(KC_1)");
        assert_eq!(simplify_token("LCTL(LALT(KC_DEL))"), "⌃(⌥(KC_DEL))");
    }

    #[test]
    fn test_replacement_is_case_sensitive() {
        assert_eq!(simplify_token("KC_lsft"), "lsft");
        assert_eq!(simplify_token("KC_trns"), "trns");
    }

    #[test]
    fn test_no_rule_matches_plain_substrings_too() {
        // "NO" is a plain substring rule, so it also fires inside longer names
        assert_eq!(simplify_token("KC_NONUS_HASH"), "✗NUS_HASH");
    }
}
