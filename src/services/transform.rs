//! Keycode rename transformation.
//!
//! Renames never edit a layer in place: they build a fresh layer and hand
//! back a new collection in which only the targeted layer differs.

use tracing::{debug, info, warn};

use crate::error::OutOfRange;
use crate::models::{Keycode, Layer};

/// Replaces every key whose token equals `old` with `new` in a copy of `layer`.
///
/// Matching is an exact comparison of the token string, so `"-1"` targets
/// empty positions. Returns the new layer and the number of replaced keys;
/// zero replacements is a normal outcome.
///
/// # Examples
///
/// ```
/// use keyboard_visualizer::models::Layer;
/// use keyboard_visualizer::services::transform::rename_in_layer;
///
/// let layer = Layer::from_tokens(&[&["KC_A", "KC_TRNS"], &["KC_TRNS"]]);
/// let (renamed, count) = rename_in_layer(&layer, "KC_TRNS", "KC_NO");
/// assert_eq!(count, 2);
/// assert_eq!(renamed, Layer::from_tokens(&[&["KC_A", "KC_NO"], &["KC_NO"]]));
/// ```
#[must_use]
pub fn rename_in_layer(layer: &Layer, old: &str, new: &str) -> (Layer, usize) {
    let replacement = Keycode::from_token(new);
    let mut count = 0;

    let rows = layer
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|keycode| {
                    if keycode.as_token() == old {
                        count += 1;
                        replacement.clone()
                    } else {
                        keycode.clone()
                    }
                })
                .collect()
        })
        .collect();

    debug!("Replaced {} instances of '{}' with '{}'", count, old, new);
    (Layer::new(rows), count)
}

/// Renames a keycode inside one layer of a collection.
///
/// Layers other than `index` are moved into the result untouched. When
/// `index` is outside `0..layers.len()` the collection is returned unchanged
/// inside the [`OutOfRange`] error.
pub fn rename_in_layer_at(
    layers: Vec<Layer>,
    index: i64,
    old: &str,
    new: &str,
) -> Result<Vec<Layer>, OutOfRange> {
    let target = match usize::try_from(index) {
        Ok(target) if target < layers.len() => target,
        _ => return Err(OutOfRange::new(index, layers)),
    };

    info!("Renaming '{}' to '{}' in layer {}", old, new, target);

    Ok(layers
        .into_iter()
        .enumerate()
        .map(|(idx, layer)| {
            if idx == target {
                rename_in_layer(&layer, old, new).0
            } else {
                layer
            }
        })
        .collect())
}

/// A single rename requested from the CLI or the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    /// Layer to modify
    pub layer: i64,
    /// Keycode to replace
    pub old: String,
    /// Replacement keycode
    pub new: String,
}

impl RenameRequest {
    /// Builds a request only when all three parts are present and non-blank.
    #[must_use]
    pub fn from_parts(layer: Option<i64>, old: Option<&str>, new: Option<&str>) -> Option<Self> {
        let old = old.map(str::trim).filter(|s| !s.is_empty())?;
        let new = new.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            layer: layer?,
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    /// Applies the rename, logging and discarding an out-of-range index.
    #[must_use]
    pub fn apply(&self, layers: Vec<Layer>) -> Vec<Layer> {
        match rename_in_layer_at(layers, self.layer, &self.old, &self.new) {
            Ok(layers) => layers,
            Err(err) => {
                warn!("{}", err);
                err.into_layers()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layers() -> Vec<Layer> {
        vec![
            Layer::from_tokens(&[&["KC_A", "KC_B"], &["-1", "KC_TRNS"]]),
            Layer::from_tokens(&[&["KC_TRNS", "MO(1)"]]),
        ]
    }

    #[test]
    fn test_rename_in_layer_counts_replacements() {
        let layer = Layer::from_tokens(&[&["KC_TRNS", "KC_TRNS"], &["KC_A"]]);
        let (_, count) = rename_in_layer(&layer, "KC_TRNS", "KC_NO");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_rename_in_layer_zero_matches_is_identity() {
        let layer = Layer::from_tokens(&[&["KC_A"]]);
        let (renamed, count) = rename_in_layer(&layer, "KC_Z", "KC_Y");
        assert_eq!(count, 0);
        assert_eq!(renamed, layer);
    }

    #[test]
    fn test_rename_sentinel_token_targets_empty_cells() {
        let layer = Layer::from_tokens(&[&["-1", "KC_A"]]);
        let (renamed, count) = rename_in_layer(&layer, "-1", "KC_NO");
        assert_eq!(count, 1);
        assert_eq!(renamed.rows[0][0], Keycode::from("KC_NO"));
    }

    #[test]
    fn test_rename_at_only_touches_target_layer() {
        let layers = sample_layers();
        let renamed = rename_in_layer_at(layers.clone(), 0, "KC_TRNS", "KC_NO").unwrap();

        assert_eq!(
            renamed[0],
            Layer::from_tokens(&[&["KC_A", "KC_B"], &["-1", "KC_NO"]])
        );
        assert_eq!(renamed[1], layers[1]);
    }

    #[test]
    fn test_rename_at_out_of_range_returns_input() {
        let layers = sample_layers();

        let err = rename_in_layer_at(layers.clone(), 2, "KC_TRNS", "KC_NO").unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.len, 2);
        assert_eq!(err.into_layers(), layers);

        let err = rename_in_layer_at(layers.clone(), -1, "KC_TRNS", "KC_NO").unwrap_err();
        assert_eq!(err.to_string(), "Layer index -1 out of range (0-1)");
        assert_eq!(err.into_layers(), layers);
    }

    #[test]
    fn test_request_requires_all_parts() {
        assert!(RenameRequest::from_parts(Some(0), Some("KC_A"), None).is_none());
        assert!(RenameRequest::from_parts(None, Some("KC_A"), Some("KC_B")).is_none());
        assert!(RenameRequest::from_parts(Some(0), Some("  "), Some("KC_B")).is_none());

        let request = RenameRequest::from_parts(Some(4), Some(" KC_TRNS "), Some("KC_NO")).unwrap();
        assert_eq!(request.old, "KC_TRNS");
        assert_eq!(request.layer, 4);
    }

    #[test]
    fn test_request_apply_out_of_range_keeps_layers() {
        let layers = sample_layers();
        let request = RenameRequest::from_parts(Some(9), Some("KC_A"), Some("KC_B")).unwrap();
        assert_eq!(request.apply(layers.clone()), layers);
    }
}
