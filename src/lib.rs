//! Keyboard Visualizer Library
//!
//! Loads Vial `.vil` layout backups, optionally rewrites keycodes in one
//! layer, and renders every layer as a PNG canvas, an interactive HTML page
//! and a plain-text summary. The `web` feature adds an upload server.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod keycode;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
#[cfg(feature = "web")]
pub mod web;

pub use error::{CanvasTooLarge, LoadError, OutOfRange};
