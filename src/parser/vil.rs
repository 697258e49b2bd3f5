//! Vial `.vil` backup parsing.
//!
//! A `.vil` file is a JSON object. The only field read here is `layout`,
//! an array of layers, each an array of rows, each an array of keycode
//! tokens. All other fields (macros, encoders, settings) are ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Dimensions, Layer};

/// Parsed Vial backup document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VilDocument {
    /// Layers in firmware order; absent in the file means no layers
    #[serde(default)]
    pub layout: Vec<Layer>,
}

impl VilDocument {
    /// Returns the layers of this document.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layout
    }
}

/// Parses a `.vil` document from a JSON string.
///
/// # Examples
///
/// ```
/// use keyboard_visualizer::parser::vil::parse_vil_str;
///
/// let doc = parse_vil_str(r#"{"version": 1, "layout": [[["KC_A", -1]]]}"#).unwrap();
/// assert_eq!(doc.layout.len(), 1);
///
/// let doc = parse_vil_str(r#"{"uid": 42}"#).unwrap();
/// assert!(doc.layout.is_empty());
/// ```
pub fn parse_vil_str(content: &str) -> Result<VilDocument, serde_json::Error> {
    let document: VilDocument = serde_json::from_str(content)?;
    debug!("Parsed document with {} layers", document.layout.len());
    Ok(document)
}

/// Takes the layer collection out of a document.
///
/// A document without a `layout` field yields an empty collection.
#[must_use]
pub fn extract_layers(document: VilDocument) -> Vec<Layer> {
    debug!("Extracted {} layers from data", document.layout.len());
    document.layout
}

/// Computes the grid extent shared by all layers.
///
/// `max_rows` is the largest row count of any layer and `max_cols` the
/// longest row of any layer. An empty collection yields `(0, 0)`.
pub fn compute_dimensions(layers: &[Layer]) -> Dimensions {
    if layers.is_empty() {
        warn!("No layers found in data");
        return Dimensions::default();
    }

    let max_rows = layers.iter().map(Layer::row_count).max().unwrap_or(0);
    let max_cols = layers.iter().map(Layer::max_row_len).max().unwrap_or(0);

    info!("Keyboard dimensions: {} rows x {} cols", max_rows, max_cols);
    Dimensions::new(max_rows, max_cols)
}
