//! Self-contained interactive HTML view.
//!
//! Each layer becomes an inline SVG using the same [`PanelGrid`] geometry and
//! category colors as the PNG. Keys carry a `<title>` tooltip with the raw
//! keycode, its label and its category. A small script lets the reader show
//! one layer or all of them.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::color_legend::generate_color_legend;
use super::image_renderer::CANVAS_TITLE;
use super::panel_grid::{font_tier, PanelGrid};
use crate::keycode::KeyLabel;
use crate::models::{Dimensions, Layer};

const STYLE: &str = "\
body{font-family:sans-serif;margin:1.5rem;background:#fafafa;color:#222}\
h1{font-size:1.4rem}\
.controls{margin:1rem 0}\
.panels{display:grid;grid-template-columns:repeat(2,max-content);gap:1rem}\
.panel{background:#fff;border:1px solid #ddd;padding:.5rem}\
.panel.blank{visibility:hidden}\
.panel h2{font-size:1rem;margin:.25rem 0 .5rem}\
.panel rect.key:hover{stroke-width:3}\
.legend{list-style:none;padding:0}\
.legend li{margin:.25rem 0}\
.swatch{display:inline-block;width:1em;height:1em;border:2px solid;margin-right:.5em;vertical-align:middle}";

const SCRIPT: &str = "\
document.getElementById('layer-select').addEventListener('change',function(e){\
var v=e.target.value;\
document.querySelectorAll('.panel[data-layer]').forEach(function(p){\
p.style.display=(v==='all'||p.dataset.layer===v)?'':'none';});\
document.querySelectorAll('.panel.blank').forEach(function(p){\
p.style.display=v==='all'?'':'none';});});";

/// Renders layers as an interactive HTML page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveRenderer {
    cell_px: u32,
}

impl Default for InteractiveRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

impl InteractiveRenderer {
    /// Creates a renderer with the given SVG cell size.
    #[must_use]
    pub fn new(cell_px: u32) -> Self {
        Self {
            cell_px: cell_px.max(8),
        }
    }

    /// Builds the page.
    ///
    /// `image_name`, when given, is linked as the static PNG rendering. With
    /// zero layers the page still renders, stating that there is nothing to
    /// show.
    #[must_use]
    pub fn render_html(
        &self,
        layers: &[Layer],
        dims: Dimensions,
        image_name: Option<&str>,
    ) -> String {
        let mut html = String::with_capacity(16 * 1024);

        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n",
            title = CANVAS_TITLE,
        );

        let Some(grid) = PanelGrid::new(layers.len(), dims, self.cell_px) else {
            warn!("No layers to visualize");
            html.push_str("<p class=\"empty\">No layers to visualize.</p>\n</body>\n</html>\n");
            return html;
        };

        let _ = writeln!(
            html,
            "<p>{} layers, {} rows &times; {} columns</p>",
            layers.len(),
            dims.max_rows,
            dims.max_cols
        );

        if let Some(name) = image_name {
            let _ = writeln!(
                html,
                "<p><a href=\"{}\">Static PNG</a></p>",
                escape_html(name)
            );
        }

        html.push_str("<div class=\"controls\"><label for=\"layer-select\">Show: </label>");
        html.push_str("<select id=\"layer-select\"><option value=\"all\">All layers</option>");
        for index in 0..layers.len() {
            let _ = write!(html, "<option value=\"{index}\">Layer {index}</option>");
        }
        html.push_str("</select></div>\n<div class=\"panels\">\n");

        for (slot, layer) in layers.iter().enumerate() {
            write_panel(&mut html, &grid, slot, layer);
        }
        for _ in layers.len()..grid.slot_count() {
            html.push_str("<div class=\"panel blank\"></div>\n");
        }

        html.push_str("</div>\n<h2>Legend</h2>\n");
        html.push_str(&generate_color_legend(layers));
        let _ = write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n");

        html
    }

    /// Writes the page to `path`, creating parent directories.
    pub fn save(
        &self,
        layers: &[Layer],
        dims: Dimensions,
        image_name: Option<&str>,
        path: &Path,
    ) -> Result<()> {
        let html = self.render_html(layers, dims, image_name);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Saved interactive view to {}", path.display());
        Ok(())
    }
}

/// Writes one layer as a `<div>` holding an SVG.
fn write_panel(html: &mut String, grid: &PanelGrid, slot: usize, layer: &Layer) {
    let (width, height) = grid.key_area_size();
    let cell = grid.cell();

    let _ = write!(
        html,
        "<div class=\"panel\" data-layer=\"{slot}\"><h2>Layer {slot}</h2>\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">"
    );

    for (row, col, keycode) in layer.keys() {
        let label = KeyLabel::of(keycode);
        let colors = label.category.colors();
        let rect = grid.local_key_rect(row, col);
        let (cx, cy) = rect.center();
        let font_px = font_tier(&label.text).cell_fraction() * cell * 1.4;

        let _ = write!(
            html,
            "<g class=\"key {slug}\"><title>{raw}\n{text} ({category})</title>\
             <rect class=\"key\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{w:.1}\" height=\"{h:.1}\" \
             rx=\"3\" fill=\"{fill}\" stroke=\"{border}\" stroke-width=\"1.5\"/>\
             <text x=\"{cx:.1}\" y=\"{cy:.1}\" font-size=\"{font_px:.1}\" \
             text-anchor=\"middle\" dominant-baseline=\"central\">{text}</text></g>",
            slug = label.category.slug(),
            raw = escape_html(keycode.as_token()),
            text = escape_html(&label.text),
            category = label.category,
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            fill = colors.fill.to_hex(),
            border = colors.border.to_hex(),
        );
    }

    html.push_str("</svg></div>\n");
}

/// Escapes text for use in HTML bodies and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::compute_dimensions;
    use tempfile::TempDir;

    fn sample_layers() -> Vec<Layer> {
        vec![
            Layer::from_tokens(&[&["KC_A", "KC_LSFT", "-1"], &["MO(1)", "KC_TRNS", "KC_NO"]]),
            Layer::from_tokens(&[&["KC_1", "DF(0)", "KC_3"]]),
            Layer::from_tokens(&[&["KC_F1"]]),
        ]
    }

    #[test]
    fn test_one_svg_per_layer() {
        let layers = sample_layers();
        let html =
            InteractiveRenderer::default().render_html(&layers, compute_dimensions(&layers), None);
        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains("data-layer=\"2\""));
        assert!(html.contains("<h2>Layer 0</h2>"));
    }

    #[test]
    fn test_blank_slot_for_odd_layer_count() {
        let layers = sample_layers();
        let html =
            InteractiveRenderer::default().render_html(&layers, compute_dimensions(&layers), None);
        assert_eq!(html.matches("panel blank").count(), 1);
    }

    #[test]
    fn test_empty_cells_have_no_key() {
        let layers = vec![Layer::from_tokens(&[&["-1", "-1"]])];
        let html =
            InteractiveRenderer::default().render_html(&layers, compute_dimensions(&layers), None);
        assert!(!html.contains("<rect"));
    }

    #[test]
    fn test_tooltip_shows_raw_label_and_category() {
        let layers = vec![Layer::from_tokens(&[&["KC_LSFT"]])];
        let html =
            InteractiveRenderer::default().render_html(&layers, compute_dimensions(&layers), None);
        assert!(html.contains("<title>KC_LSFT\n⇧ (Modifier combo)</title>"));
        assert!(html.contains("fill=\"#FFFFCC\""));
    }

    #[test]
    fn test_labels_are_escaped() {
        let layers = vec![Layer::from_tokens(&[&["<b>&"]])];
        let html =
            InteractiveRenderer::default().render_html(&layers, compute_dimensions(&layers), None);
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn test_image_link_included_when_given() {
        let layers = sample_layers();
        let dims = compute_dimensions(&layers);
        let renderer = InteractiveRenderer::default();
        assert!(renderer
            .render_html(&layers, dims, Some("out.png"))
            .contains("href=\"out.png\""));
        assert!(!renderer.render_html(&layers, dims, None).contains("Static PNG"));
    }

    #[test]
    fn test_zero_layers_page() {
        let html = InteractiveRenderer::default().render_html(&[], Dimensions::default(), None);
        assert!(html.contains("No layers to visualize"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("html").join("view.html");
        let layers = sample_layers();
        InteractiveRenderer::default()
            .save(&layers, compute_dimensions(&layers), None, &path)
            .unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>\"c\"&'d'"), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
        assert_eq!(escape_html("⇧"), "⇧");
    }
}
