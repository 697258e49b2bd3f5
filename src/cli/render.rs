//! Render command: load a `.vil` file, optionally rename a keycode, print a
//! summary and write the PNG (and optionally HTML) visualization.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::export::{summarize, InteractiveRenderer};
use crate::models::Layer;
use crate::parser::compute_dimensions;
use crate::services::{LayoutService, RenameRequest};

/// Visualize Vial keyboard layers from a .vil backup file
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Input .vil file
    #[arg(value_name = "INPUT_FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Output PNG file
    #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Layer index to apply the keycode rename to (e.g. 4)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub rename_layer: Option<i64>,

    /// Keycode to replace (e.g. KC_TRNS)
    #[arg(long, value_name = "KEYCODE")]
    pub rename_old: Option<String>,

    /// Replacement keycode (e.g. KC_NO)
    #[arg(long, value_name = "KEYCODE")]
    pub rename_new: Option<String>,

    /// Also write an interactive HTML view to this file
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Skip printing the text summary
    #[arg(long)]
    pub no_summary: bool,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let layers = LayoutService::load_layers(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e}")))?;

        let layers = self.apply_rename(layers);

        if !self.no_summary {
            print!("{}", summarize(&layers));
        }

        let dims = compute_dimensions(&layers);

        let renderer = config
            .render
            .image_renderer()
            .map_err(|e| CliError::validation(format!("Invalid render settings: {e}")))?;

        let saved = renderer
            .save(&layers, dims, &self.output)
            .map_err(|e| CliError::io(format!("Failed to write image: {e:#}")))?;

        if let Some(html_path) = &self.html {
            let image_link = saved.then(|| relative_link(html_path, &self.output));
            InteractiveRenderer::new(renderer.cell_px())
                .save(&layers, dims, image_link.as_deref(), html_path)
                .map_err(|e| CliError::io(format!("Failed to write HTML: {e:#}")))?;
        }

        info!("Visualization complete!");
        Ok(())
    }

    /// Applies the rename when all three options are present.
    fn apply_rename(&self, layers: Vec<Layer>) -> Vec<Layer> {
        let request = RenameRequest::from_parts(
            self.rename_layer,
            self.rename_old.as_deref(),
            self.rename_new.as_deref(),
        );

        match request {
            Some(request) => request.apply(layers),
            None => {
                if self.rename_layer.is_some()
                    || self.rename_old.is_some()
                    || self.rename_new.is_some()
                {
                    warn!("Rename needs --rename-layer, --rename-old and --rename-new; skipping");
                }
                layers
            }
        }
    }
}

/// Link from the HTML file to the PNG: a bare file name when both live in
/// the same directory, otherwise the PNG path as given.
fn relative_link(html_path: &Path, image_path: &Path) -> String {
    let same_dir = html_path.parent().unwrap_or_else(|| Path::new(""))
        == image_path.parent().unwrap_or_else(|| Path::new(""));

    match image_path.file_name() {
        Some(name) if same_dir => name.to_string_lossy().into_owned(),
        _ => image_path.to_string_lossy().into_owned(),
    }
}
