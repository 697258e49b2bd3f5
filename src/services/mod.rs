//! Service layer for loading and transforming layouts.
//!
//! Services coordinate between file I/O, the parser and the models, and are
//! shared by the CLI and the web server.

pub mod layouts;
pub mod transform;

// Re-export commonly used types and functions
pub use layouts::LayoutService;
pub use transform::{rename_in_layer, rename_in_layer_at, RenameRequest};
