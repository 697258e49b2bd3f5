//! Configuration management for the application.
//!
//! Settings live in a TOML file in the platform config directory. Every
//! section and field is optional; anything missing falls back to the defaults
//! below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;
use crate::export::ImageRenderer;
use crate::models::RgbColor;

/// Largest accepted upload in bytes (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Directories used for uploads, generated artifacts and log files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Where the web server stores uploaded layout files
    pub upload_dir: PathBuf,
    /// Where generated PNG/HTML files are written
    pub output_dir: PathBuf,
    /// Where daily log files go
    pub log_dir: PathBuf,
    /// Write a daily log file into `log_dir` in addition to console output
    pub log_to_file: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("output"),
            log_dir: PathBuf::from("logs"),
            log_to_file: false,
        }
    }
}

/// Raster rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Size of one key cell in pixels
    pub cell_px: u32,
    /// Canvas background as `#RRGGBB`
    pub background: String,
    /// Largest PNG canvas, in pixels, a layout may produce
    pub max_canvas_px: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: ImageRenderer::DEFAULT_CELL_PX,
            background: RgbColor::WHITE.to_hex(),
            max_canvas_px: ImageRenderer::DEFAULT_MAX_CANVAS_PX,
        }
    }
}

impl PathConfig {
    /// Log directory to pass to [`crate::logging::init`], if file logging is on.
    #[must_use]
    pub fn file_log_dir(&self) -> Option<&Path> {
        self.log_to_file.then_some(self.log_dir.as_path())
    }
}

impl RenderConfig {
    /// Builds a PNG renderer from these settings.
    pub fn image_renderer(&self) -> Result<ImageRenderer> {
        let background = RgbColor::from_hex(&self.background)
            .with_context(|| format!("Invalid background color: {}", self.background))?;
        Ok(ImageRenderer::new(self.cell_px)
            .with_background(background)
            .with_max_canvas_px(self.max_canvas_px))
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeyboardVisualizer/config.toml`
/// - macOS: `~/Library/Application Support/KeyboardVisualizer/config.toml`
/// - Windows: `%APPDATA%\KeyboardVisualizer\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Rendering settings
    pub render: RenderConfig,
    /// Web server settings
    pub web: WebConfig,
}

impl Config {
    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// A missing file, or a platform without a config directory, yields the
    /// defaults.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Loads configuration from an explicit path.
    ///
    /// Returns defaults if the file does not exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` when given, otherwise from the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::load, Self::load_from)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `cell_px` is between 8 and 512
    /// - `background` is a `#RRGGBB` color
    /// - `max_canvas_px` is non-zero
    /// - `max_upload_bytes` is non-zero
    pub fn validate(&self) -> Result<()> {
        if !(8..=512).contains(&self.render.cell_px) {
            anyhow::bail!(
                "render.cell_px must be between 8 and 512, got {}",
                self.render.cell_px
            );
        }

        self.render.image_renderer()?;

        if self.render.max_canvas_px == 0 {
            anyhow::bail!("render.max_canvas_px must be greater than zero");
        }

        if self.web.max_upload_bytes == 0 {
            anyhow::bail!("web.max_upload_bytes must be greater than zero");
        }

        Ok(())
    }
}
