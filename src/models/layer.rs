//! Layer grid data structures.

use crate::models::Keycode;
use serde::{Deserialize, Serialize};

/// One row of a layer, in column order.
pub type Row = Vec<Keycode>;

/// A single keyboard layer: rows of keycodes in matrix order.
///
/// Rows may differ in length and layers may differ in row count; nothing here
/// requires the grid to be rectangular.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layer {
    /// Rows in insertion order (index = row number)
    pub rows: Vec<Row>,
}

impl Layer {
    /// Creates a layer from its rows.
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds a layer from token strings, mapping `"-1"` to an empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyboard_visualizer::models::{Keycode, Layer};
    ///
    /// let layer = Layer::from_tokens(&[&["KC_A", "KC_B"], &["-1", "KC_TRNS"]]);
    /// assert_eq!(layer.rows[1][0], Keycode::Empty);
    /// ```
    #[must_use]
    pub fn from_tokens(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|token| Keycode::from(*token)).collect())
                .collect(),
        )
    }

    /// Number of rows in this layer.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row in this layer.
    #[must_use]
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates over every non-empty key as `(row, col, keycode)`.
    pub fn keys(&self) -> impl Iterator<Item = (usize, usize, &Keycode)> {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, keycode)| !keycode.is_empty())
                .map(move |(col_idx, keycode)| (row_idx, col_idx, keycode))
        })
    }
}

/// Grid extent shared by every layer panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Largest row count among all layers
    pub max_rows: usize,
    /// Largest row length among all rows of all layers
    pub max_cols: usize,
}

impl Dimensions {
    /// Creates dimensions from explicit extents.
    #[must_use]
    pub const fn new(max_rows: usize, max_cols: usize) -> Self {
        Self { max_rows, max_cols }
    }

    /// Returns `(max_rows, max_cols)`.
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize) {
        (self.max_rows, self.max_cols)
    }

    /// True when there is no cell to draw.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.max_rows == 0 || self.max_cols == 0
    }
}
