//! CLI command handlers.
//!
//! The binary in `main.rs` parses arguments into these structs and maps any
//! [`common::CliError`] to a non-zero exit.

pub mod common;
pub mod render;

pub use common::{CliError, CliResult, ExitCode};
pub use render::RenderArgs;
