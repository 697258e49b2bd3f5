//! Keyboard Visualizer Web Server Binary
//!
//! Serves the upload form and the generated visualizations.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from config.toml (default 127.0.0.1:5000)
//! keyboard-visualizer-web
//!
//! # Override the bind address and output directory
//! keyboard-visualizer-web --host 0.0.0.0 --port 8080 --output-dir ./renders
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use keyboard_visualizer::config::Config;
use keyboard_visualizer::constants::WEB_BINARY_NAME;
use keyboard_visualizer::{logging, web};

/// Keyboard Visualizer Web Server - upload .vil files and view their layers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(short, long, env = "KEYBOARD_VISUALIZER_PORT")]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Directory for generated files (overrides config)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Directory for uploaded files (overrides config)
    #[arg(long, value_name = "DIR")]
    upload_dir: Option<PathBuf>,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if let Some(host) = args.host {
        config.web.host = host;
    }
    if let Some(dir) = args.output_dir {
        config.paths.output_dir = dir;
    }
    if let Some(dir) = args.upload_dir {
        config.paths.upload_dir = dir;
    }

    logging::init(WEB_BINARY_NAME, args.verbose, config.paths.file_log_dir())?;

    info!("Output directory: {}", config.paths.output_dir.display());

    let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;

    web::run_server(config, addr).await
}
