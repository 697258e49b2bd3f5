//! Parsing for layout backup files.
//!
//! Currently handles Vial `.vil` backups (plain JSON).

pub mod vil;

// Re-export commonly used functions
pub use vil::{compute_dimensions, extract_layers, parse_vil_str, VilDocument};
