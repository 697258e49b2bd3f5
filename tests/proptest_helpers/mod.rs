#![allow(dead_code)]

use keyboard_visualizer::models::{Keycode, Layer};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Tokens drawn from the shapes that show up in real backups.
pub fn arb_token() -> BoxedStrategy<String> {
    prop_oneof![
        3 => Just("-1".to_string()),
        3 => Just("KC_TRNS".to_string()),
        1 => Just("KC_NO".to_string()),
        4 => "KC_[A-Z0-9]{1,5}",
        1 => "MO\\([0-9]\\)",
        1 => "LT\\([0-9],KC_[A-Z]{1,3}\\)",
        1 => "DF\\([0-9]\\)",
        1 => "(LSFT|LCTL|LALT|LGUI)\\(KC_[A-Z]\\)",
    ]
    .boxed()
}

/// A layer with up to `max_rows` rows of up to `max_cols` tokens; rows may
/// differ in length.
pub fn arb_layer(max_rows: usize, max_cols: usize) -> BoxedStrategy<Layer> {
    prop::collection::vec(prop::collection::vec(arb_token(), 0..=max_cols), 0..=max_rows)
        .prop_map(|rows| {
            Layer::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(Keycode::from_token).collect())
                    .collect(),
            )
        })
        .boxed()
}

pub fn arb_layers(
    max_layers: usize,
    max_rows: usize,
    max_cols: usize,
) -> BoxedStrategy<Vec<Layer>> {
    prop::collection::vec(arb_layer(max_rows, max_cols), 0..=max_layers).boxed()
}

/// True when any cell of the layer holds `token`.
pub fn layer_contains(layer: &Layer, token: &str) -> bool {
    layer
        .rows
        .iter()
        .flatten()
        .any(|keycode| keycode.as_token() == token)
}
