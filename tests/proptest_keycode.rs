//! Property tests for label simplification and classification.

mod proptest_helpers;

use keyboard_visualizer::keycode::{classify, simplify, simplify_token, KeyCategory, KeyLabel};
use keyboard_visualizer::models::Keycode;
use proptest::prelude::*;
use proptest_helpers::arb_token;

/// First-match reading of the classification rules.
fn reference_category(label: &str) -> KeyCategory {
    let rules: [(KeyCategory, bool); 4] = [
        (KeyCategory::Transparent, label == "▽"),
        (
            KeyCategory::LayerSwitch,
            label.starts_with("MO(") || label.starts_with("LT"),
        ),
        (KeyCategory::DefaultLayerChange, label.starts_with("DF(")),
        (
            KeyCategory::ModifierCombo,
            ["⇧", "⌃", "⌥", "⌘"].iter().any(|g| label.contains(g)),
        ),
    ];
    rules
        .into_iter()
        .find_map(|(category, hit)| hit.then_some(category))
        .unwrap_or(KeyCategory::Regular)
}

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn classify_matches_first_rule(token in arb_token()) {
        let label = simplify_token(&token);
        let category = classify(&label);

        prop_assert!(KeyCategory::ALL.contains(&category));
        prop_assert_eq!(category, reference_category(&label));
    }

    #[test]
    fn classify_arbitrary_text_never_panics(label in "\\PC{0,12}") {
        prop_assert_eq!(classify(&label), reference_category(&label));
    }

    #[test]
    fn simplify_agrees_with_token_form(token in arb_token()) {
        let keycode = Keycode::from_token(token.clone());
        prop_assert_eq!(simplify(&keycode), simplify_token(&token));
        prop_assert_eq!(keycode.is_empty(), token == "-1");
    }

    #[test]
    fn simplify_strips_single_prefix(rest in "[A-Z][A-Z0-9]{0,5}") {
        let label = simplify_token(&format!("KC_{rest}"));
        prop_assert!(!label.starts_with("KC_"));
    }

    #[test]
    fn key_label_is_consistent(token in arb_token()) {
        let label = KeyLabel::of(&Keycode::from_token(token));
        prop_assert_eq!(label.category, classify(&label.text));
    }
}

#[test]
fn empty_sentinel_has_empty_label() {
    assert_eq!(simplify_token("-1"), "");
    assert_eq!(simplify(&Keycode::from_token("-1")), "");
}
