//! Layout file I/O service.
//!
//! This module centralizes reading backup files so the CLI and the web
//! server report missing and malformed input the same way.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, info};

use crate::error::LoadError;
use crate::models::Layer;
use crate::parser::{self, VilDocument};

/// Service for loading layout backup files.
pub struct LayoutService;

impl LayoutService {
    /// Loads and parses a `.vil` backup.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the backup file
    ///
    /// # Returns
    ///
    /// * `Ok(VilDocument)` - Successfully parsed document
    /// * `Err(LoadError::NotFound)` - The path does not exist
    /// * `Err(LoadError::Parse)` - The content is not a valid document
    /// * `Err(LoadError::Io)` - Any other read failure
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use keyboard_visualizer::services::LayoutService;
    ///
    /// let document = LayoutService::load(Path::new("my_keyboard.vil"))?;
    /// println!("{} layers", document.layers().len());
    /// # Ok::<(), keyboard_visualizer::error::LoadError>(())
    /// ```
    pub fn load(path: &Path) -> Result<VilDocument, LoadError> {
        info!("Loading file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                error!("File not found: {}", path.display());
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                error!("Error loading file {}: {}", path.display(), source);
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let document = parser::parse_vil_str(&content).map_err(|source| {
            error!("Invalid JSON in file {}: {}", path.display(), source);
            LoadError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            "Successfully loaded file with {} layers",
            document.layers().len()
        );
        Ok(document)
    }

    /// Loads a backup and returns its layers.
    pub fn load_layers(path: &Path) -> Result<Vec<Layer>, LoadError> {
        Self::load(path).map(parser::extract_layers)
    }
}
