//! Keyboard Visualizer - render Vial keyboard layers from the command line
//!
//! ```bash
//! # Basic usage
//! keyboard-visualizer input.vil output.png
//!
//! # Rename KC_TRNS to KC_NO in layer 4
//! keyboard-visualizer input.vil output.png \
//!     --rename-layer 4 --rename-old KC_TRNS --rename-new KC_NO
//!
//! # Without text summary, with an interactive page
//! keyboard-visualizer input.vil output.png --no-summary --html output/layers.html
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use keyboard_visualizer::cli::{CliError, ExitCode, RenderArgs};
use keyboard_visualizer::config::Config;
use keyboard_visualizer::constants::APP_BINARY_NAME;
use keyboard_visualizer::logging;

/// Visualize Vial keyboard layers from .vil backup files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = Config::resolve(cli.config.as_deref())
        .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))?;

    logging::init(APP_BINARY_NAME, cli.debug, config.paths.file_log_dir())
        .map_err(|e| CliError::io(format!("Failed to set up logging: {e:#}")))?;
    debug!("Debug logging enabled");

    cli.render.execute(&config)
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
