//! Data models for Vial layout backups.
//!
//! Models are plain data: loading, classification and rendering live in
//! their own modules and only read these types.

pub mod keycode;
pub mod layer;
pub mod rgb;

// Re-export all model types
pub use keycode::{Keycode, EMPTY_TOKEN};
pub use layer::{Dimensions, Layer, Row};
pub use rgb::RgbColor;
