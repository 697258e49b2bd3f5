//! Rendering of layer collections.
//!
//! Three outputs share one layout: a PNG canvas ([`ImageRenderer`]), an
//! interactive HTML page ([`InteractiveRenderer`]) and a text summary
//! ([`summarize`]). Panel and key placement lives in [`panel_grid`].

pub mod color_legend;
mod glyphs;
pub mod image_renderer;
pub mod interactive;
pub mod panel_grid;
pub mod summary;

pub use color_legend::generate_color_legend;
pub use image_renderer::ImageRenderer;
pub use interactive::InteractiveRenderer;
pub use panel_grid::{font_tier, FontTier, KeyRect, PanelGrid};
pub use summary::summarize;
