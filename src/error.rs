//! Error types for the loader, transformer and renderer.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Layer;

/// Fatal failures while loading a layout backup.
///
/// Any of these aborts the pipeline before an artifact is written.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input path does not resolve to a file.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The content is not a valid layout document.
    #[error("Invalid JSON in file {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Any other read failure (permissions, directory, ...).
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A rename targeted a layer that does not exist.
///
/// Recoverable: the untouched collection travels with the error so callers
/// can log it and carry on rendering.
#[derive(Debug, Error)]
#[error("Layer index {index} out of range (0-{})", .len.saturating_sub(1))]
pub struct OutOfRange {
    /// Requested layer index
    pub index: i64,
    /// Number of layers available
    pub len: usize,
    layers: Vec<Layer>,
}

impl OutOfRange {
    pub(crate) fn new(index: i64, layers: Vec<Layer>) -> Self {
        let len = layers.len();
        Self { index, len, layers }
    }

    /// Returns the unchanged layer collection.
    #[must_use]
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }
}

/// The canvas needed for a layout exceeds the configured pixel budget.
///
/// Raised before any pixel buffer is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Canvas of {width}x{height} pixels exceeds the limit of {limit} pixels")]
pub struct CanvasTooLarge {
    /// Required canvas width
    pub width: u32,
    /// Required canvas height
    pub height: u32,
    /// Largest allowed `width * height`
    pub limit: u64,
}
