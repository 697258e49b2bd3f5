//! Property tests for keycode renames and dimension computation.

mod proptest_helpers;

use keyboard_visualizer::parser::compute_dimensions;
use keyboard_visualizer::services::transform::{rename_in_layer, rename_in_layer_at};
use proptest::prelude::*;
use proptest_helpers::{arb_layer, arb_layers, arb_token, layer_contains};

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn rename_only_touches_matching_cells(
        layer in arb_layer(5, 8),
        old in arb_token(),
        new in arb_token(),
    ) {
        let (renamed, count) = rename_in_layer(&layer, &old, &new);

        prop_assert_eq!(renamed.rows.len(), layer.rows.len());
        let mut matched = 0;
        for (before_row, after_row) in layer.rows.iter().zip(&renamed.rows) {
            prop_assert_eq!(before_row.len(), after_row.len());
            for (before, after) in before_row.iter().zip(after_row) {
                if before.as_token() == old {
                    matched += 1;
                    prop_assert_eq!(after.as_token(), new.as_str());
                } else {
                    prop_assert_eq!(before, after);
                }
            }
        }
        prop_assert_eq!(count, matched);
    }

    #[test]
    fn rename_to_absent_token_is_reversible(
        layer in arb_layer(5, 8),
        old in arb_token(),
        new in "ZZ_[A-Z]{1,4}",
    ) {
        prop_assume!(!layer_contains(&layer, &new));

        let (renamed, forward) = rename_in_layer(&layer, &old, &new);
        let (restored, back) = rename_in_layer(&renamed, &new, &old);

        prop_assert_eq!(forward, back);
        prop_assert_eq!(restored, layer);
    }

    #[test]
    fn rename_at_out_of_range_returns_input(
        layers in arb_layers(5, 3, 4),
        offset in 0i64..100,
        negative in any::<bool>(),
    ) {
        let index = if negative {
            -1 - offset
        } else {
            layers.len() as i64 + offset
        };

        let err = rename_in_layer_at(layers.clone(), index, "KC_TRNS", "KC_NO").unwrap_err();
        prop_assert_eq!(err.index, index);
        prop_assert_eq!(err.into_layers(), layers);
    }

    #[test]
    fn rename_at_changes_only_target_layer(
        layers in arb_layers(5, 3, 4).prop_filter("needs a layer", |l| !l.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.index(layers.len());
        let renamed =
            rename_in_layer_at(layers.clone(), target as i64, "KC_TRNS", "KC_NO").unwrap();

        prop_assert_eq!(renamed.len(), layers.len());
        for (idx, (before, after)) in layers.iter().zip(&renamed).enumerate() {
            if idx == target {
                prop_assert_eq!(after, &rename_in_layer(before, "KC_TRNS", "KC_NO").0);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn dimensions_are_maxima(layers in arb_layers(6, 6, 10)) {
        let dims = compute_dimensions(&layers);

        let max_rows = layers.iter().map(|l| l.rows.len()).max().unwrap_or(0);
        let max_cols = layers
            .iter()
            .flat_map(|l| l.rows.iter().map(Vec::len))
            .max()
            .unwrap_or(0);

        prop_assert_eq!(dims.as_tuple(), (max_rows, max_cols));
    }
}
