//! Panel grid geometry shared by the raster and interactive renderers.
//!
//! Layers are packed row-major into a grid of panels, two per row. Every
//! panel is sized from the keyboard-wide [`Dimensions`], so a layer that uses
//! fewer keys leaves the rest of its panel blank. Row 0 of a layer is drawn
//! at the top of its panel.

use crate::models::Dimensions;

/// Preferred number of panels per grid row.
pub const PANEL_COLUMNS: usize = 2;

/// Inset between a key rectangle and its cell, as a fraction of one cell.
pub const KEY_INSET: f32 = 0.05;

/// Outer margin around the whole canvas, in cells.
const MARGIN_CELLS: f32 = 0.5;
/// Height of the canvas banner, in cells.
const BANNER_CELLS: f32 = 1.0;
/// Height of each panel's title band, in cells.
const TITLE_CELLS: f32 = 0.75;
/// Gap between neighbouring panels, in cells.
const GAP_CELLS: f32 = 0.5;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl KeyRect {
    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Label size bucket chosen from the label's character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTier {
    /// Up to 4 characters
    Large,
    /// 5 to 8 characters
    Medium,
    /// Longer labels
    Small,
}

impl FontTier {
    /// Glyph height as a fraction of one cell.
    #[must_use]
    pub const fn cell_fraction(self) -> f32 {
        match self {
            Self::Large => 0.2,
            Self::Medium => 0.11,
            Self::Small => 0.085,
        }
    }
}

/// Picks the font tier for a label.
///
/// Counts characters rather than bytes so glyph labels like `R⇧` are short.
#[must_use]
pub fn font_tier(label: &str) -> FontTier {
    match label.chars().count() {
        0..=4 => FontTier::Large,
        5..=8 => FontTier::Medium,
        _ => FontTier::Small,
    }
}

/// Placement of `layer_count` layer panels on one canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGrid {
    layer_count: usize,
    columns: usize,
    rows: usize,
    dims: Dimensions,
    cell: f32,
}

impl PanelGrid {
    /// Lays out `layer_count` panels for a keyboard of the given dimensions.
    ///
    /// A single layer gets a 1×1 grid; otherwise two columns and
    /// `ceil(layer_count / 2)` rows. Returns `None` when there is nothing to
    /// lay out.
    #[must_use]
    pub fn new(layer_count: usize, dims: Dimensions, cell_px: u32) -> Option<Self> {
        if layer_count == 0 {
            return None;
        }
        let columns = layer_count.min(PANEL_COLUMNS);
        let rows = layer_count.div_ceil(columns);
        Some(Self {
            layer_count,
            columns,
            rows,
            dims,
            cell: cell_px.max(1) as f32,
        })
    }

    /// Number of layers placed on the grid.
    #[must_use]
    pub const fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// `(rows, columns)` of the panel grid.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total panel slots, including blank trailing ones.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Keyboard dimensions every panel is sized from.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Size of one grid cell in pixels.
    #[must_use]
    pub const fn cell(&self) -> f32 {
        self.cell
    }

    /// Outer canvas margin in pixels.
    #[must_use]
    pub fn margin(&self) -> f32 {
        MARGIN_CELLS * self.cell
    }

    /// Banner height in pixels.
    #[must_use]
    pub fn banner_height(&self) -> f32 {
        BANNER_CELLS * self.cell
    }

    /// Panel title band height in pixels.
    #[must_use]
    pub fn title_height(&self) -> f32 {
        TITLE_CELLS * self.cell
    }

    /// Width and height of the key area of a panel.
    #[must_use]
    pub fn key_area_size(&self) -> (f32, f32) {
        (
            self.dims.max_cols as f32 * self.cell,
            self.dims.max_rows as f32 * self.cell,
        )
    }

    /// Full panel size including the title band.
    #[must_use]
    pub fn panel_size(&self) -> (f32, f32) {
        let (width, height) = self.key_area_size();
        (width, height + self.title_height())
    }

    /// Canvas size in whole pixels.
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        let (panel_w, panel_h) = self.panel_size();
        let gap = GAP_CELLS * self.cell;
        let width = 2.0 * self.margin()
            + self.columns as f32 * panel_w
            + (self.columns - 1) as f32 * gap;
        let height = 2.0 * self.margin()
            + self.banner_height()
            + self.rows as f32 * panel_h
            + (self.rows - 1) as f32 * gap;
        (width.ceil() as u32, height.ceil() as u32)
    }

    /// Number of pixels in the canvas.
    ///
    /// Sizes beyond `u32::MAX` per side saturate, so the count never wraps.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        let (width, height) = self.canvas_size();
        u64::from(width) * u64::from(height)
    }

    /// Top-left corner of a panel slot (title band included).
    #[must_use]
    pub fn panel_origin(&self, slot: usize) -> (f32, f32) {
        let (panel_w, panel_h) = self.panel_size();
        let gap = GAP_CELLS * self.cell;
        let grid_row = slot / self.columns;
        let grid_col = slot % self.columns;
        (
            self.margin() + grid_col as f32 * (panel_w + gap),
            self.margin() + self.banner_height() + grid_row as f32 * (panel_h + gap),
        )
    }

    /// Key rectangle relative to the top-left of a panel's key area.
    #[must_use]
    pub fn local_key_rect(&self, row: usize, col: usize) -> KeyRect {
        let inset = KEY_INSET * self.cell;
        let size = self.cell - 2.0 * inset;
        KeyRect {
            x: col as f32 * self.cell + inset,
            y: row as f32 * self.cell + inset,
            width: size,
            height: size,
        }
    }

    /// Key rectangle in canvas coordinates.
    #[must_use]
    pub fn key_rect(&self, slot: usize, row: usize, col: usize) -> KeyRect {
        let (origin_x, origin_y) = self.panel_origin(slot);
        let local = self.local_key_rect(row, col);
        KeyRect {
            x: origin_x + local.x,
            y: origin_y + self.title_height() + local.y,
            ..local
        }
    }
}
