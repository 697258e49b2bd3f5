//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Keyboard Visualizer";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "KeyboardVisualizer";

/// The CLI binary name (used in log file names and command examples).
pub const APP_BINARY_NAME: &str = "keyboard-visualizer";

/// The web server binary name.
pub const WEB_BINARY_NAME: &str = "keyboard-visualizer-web";

/// Input read by the CLI when no file is given.
pub const DEFAULT_INPUT_FILE: &str = "current copy.vil";

/// PNG written by the CLI when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "output/keyboard_layers.png";
