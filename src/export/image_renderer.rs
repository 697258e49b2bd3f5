//! Raster (PNG) rendering of all layers on one canvas.
//!
//! Each layer becomes a panel of colored key rectangles with centered
//! labels. Panel placement and key geometry come from [`PanelGrid`]; this
//! module only turns that geometry into pixels.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info, warn};

use super::glyphs::{glyph_for, is_set};
use super::panel_grid::{font_tier, KeyRect, PanelGrid};
use crate::error::CanvasTooLarge;
use crate::keycode::KeyLabel;
use crate::models::{Dimensions, Layer, RgbColor};

/// Banner text drawn across the top of the canvas.
pub const CANVAS_TITLE: &str = "Keyboard Layer Visualization";

/// Renders layers to an RGBA image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRenderer {
    cell_px: u32,
    background: RgbColor,
    max_canvas_px: u64,
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_PX)
    }
}

impl ImageRenderer {
    /// Default size of one key cell in pixels.
    pub const DEFAULT_CELL_PX: u32 = 64;

    /// Default pixel budget for one canvas (about 200 MB of RGBA).
    pub const DEFAULT_MAX_CANVAS_PX: u64 = 50_000_000;

    /// Creates a renderer with the given cell size.
    #[must_use]
    pub fn new(cell_px: u32) -> Self {
        Self {
            cell_px: cell_px.max(8),
            background: RgbColor::WHITE,
            max_canvas_px: Self::DEFAULT_MAX_CANVAS_PX,
        }
    }

    /// Sets the canvas background color.
    #[must_use]
    pub const fn with_background(mut self, background: RgbColor) -> Self {
        self.background = background;
        self
    }

    /// Sets the largest canvas, in pixels, this renderer will allocate.
    #[must_use]
    pub const fn with_max_canvas_px(mut self, max_canvas_px: u64) -> Self {
        self.max_canvas_px = max_canvas_px;
        self
    }

    /// Cell size in pixels.
    #[must_use]
    pub const fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Draws every layer into one image.
    ///
    /// Returns `Ok(None)` (and logs a warning) when there are no layers, and
    /// [`CanvasTooLarge`] when the canvas would exceed the pixel budget.
    pub fn render(
        &self,
        layers: &[Layer],
        dims: Dimensions,
    ) -> Result<Option<RgbaImage>, CanvasTooLarge> {
        let Some(grid) = PanelGrid::new(layers.len(), dims, self.cell_px) else {
            warn!("No layers to visualize");
            return Ok(None);
        };

        let (width, height) = grid.canvas_size();
        if grid.pixel_count() > self.max_canvas_px {
            return Err(CanvasTooLarge {
                width,
                height,
                limit: self.max_canvas_px,
            });
        }

        info!("Creating visualization for {} layers", layers.len());
        let mut canvas = RgbaImage::from_pixel(width, height, self.background.to_rgba());

        let banner_center = (
            width as f32 / 2.0,
            grid.margin() + grid.banner_height() / 2.0,
        );
        draw_text(
            &mut canvas,
            CANVAS_TITLE,
            banner_center,
            grid.banner_height() * 0.4,
            RgbColor::BLACK.to_rgba(),
            None,
        );

        for (slot, layer) in layers.iter().enumerate() {
            debug!("Plotting layer {}", slot);
            draw_panel(&mut canvas, &grid, slot, layer);
        }

        // Trailing slots stay as background so the grid remains rectangular
        Ok(Some(canvas))
    }

    /// Renders and writes a PNG file, creating parent directories.
    ///
    /// Returns `Ok(false)` without touching the file system when there are
    /// no layers to draw. An oversized canvas is an error and writes nothing.
    pub fn save(&self, layers: &[Layer], dims: Dimensions, path: &Path) -> Result<bool> {
        let Some(image) = self.render(layers, dims)? else {
            return Ok(false);
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;

        info!("Saved visualization to {}", path.display());
        Ok(true)
    }
}

/// Draws one layer panel: title band plus every non-empty key.
fn draw_panel(canvas: &mut RgbaImage, grid: &PanelGrid, slot: usize, layer: &Layer) {
    let (origin_x, origin_y) = grid.panel_origin(slot);
    let (panel_width, _) = grid.panel_size();

    draw_text(
        canvas,
        &format!("Layer {slot}"),
        (origin_x + panel_width / 2.0, origin_y + grid.title_height() / 2.0),
        grid.title_height() * 0.45,
        RgbColor::BLACK.to_rgba(),
        None,
    );

    let border_px = (grid.cell() / 40.0).round().max(1.0);

    for (row, col, keycode) in layer.keys() {
        let label = KeyLabel::of(keycode);
        let colors = label.category.colors();
        let rect = grid.key_rect(slot, row, col);

        fill_rect(canvas, rect, colors.fill.to_rgba());
        stroke_rect(canvas, rect, border_px, colors.border.to_rgba());

        let glyph_px = font_tier(&label.text).cell_fraction() * grid.cell();
        draw_text(
            canvas,
            &label.text,
            rect.center(),
            glyph_px,
            RgbColor::BLACK.to_rgba(),
            Some(rect),
        );
    }
}

/// Fills a rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, rect: KeyRect, color: Rgba<u8>) {
    let x0 = rect.x.round().max(0.0) as u32;
    let y0 = rect.y.round().max(0.0) as u32;
    let x1 = ((rect.x + rect.width).round().max(0.0) as u32).min(canvas.width());
    let y1 = ((rect.y + rect.height).round().max(0.0) as u32).min(canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Draws a rectangle outline of the given thickness inside `rect`.
fn stroke_rect(canvas: &mut RgbaImage, rect: KeyRect, thickness: f32, color: Rgba<u8>) {
    let t = thickness.min(rect.width / 2.0).min(rect.height / 2.0);
    let edges = [
        KeyRect { height: t, ..rect },
        KeyRect {
            y: rect.y + rect.height - t,
            height: t,
            ..rect
        },
        KeyRect { width: t, ..rect },
        KeyRect {
            x: rect.x + rect.width - t,
            width: t,
            ..rect
        },
    ];
    for edge in edges {
        fill_rect(canvas, edge, color);
    }
}

/// Draws a single line of text centered on `center`.
///
/// Glyphs are scaled nearest-neighbour from 8×8 bitmaps to `glyph_px`
/// square cells. Pixels outside `clip` (when given) or the canvas are skipped.
fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    center: (f32, f32),
    glyph_px: f32,
    color: Rgba<u8>,
    clip: Option<KeyRect>,
) {
    let size = glyph_px.round().max(1.0) as i64;
    let char_count = text.chars().count() as i64;
    let start_x = (center.0 - (char_count * size) as f32 / 2.0).round() as i64;
    let top = (center.1 - size as f32 / 2.0).round() as i64;

    let (clip_x0, clip_y0, clip_x1, clip_y1) = match clip {
        Some(r) => (
            r.x.floor() as i64,
            r.y.floor() as i64,
            (r.x + r.width).ceil() as i64,
            (r.y + r.height).ceil() as i64,
        ),
        None => (0, 0, i64::from(canvas.width()), i64::from(canvas.height())),
    };
    let max_x = clip_x1.min(i64::from(canvas.width()));
    let max_y = clip_y1.min(i64::from(canvas.height()));
    let min_x = clip_x0.max(0);
    let min_y = clip_y0.max(0);

    for (index, ch) in text.chars().enumerate() {
        let glyph = glyph_for(ch);
        let left = start_x + index as i64 * size;
        for dy in 0..size {
            let y = top + dy;
            if y < min_y || y >= max_y {
                continue;
            }
            let glyph_row = (dy * 8 / size) as usize;
            for dx in 0..size {
                let x = left + dx;
                if x < min_x || x >= max_x {
                    continue;
                }
                let glyph_col = (dx * 8 / size) as usize;
                if is_set(&glyph, glyph_row, glyph_col) {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
