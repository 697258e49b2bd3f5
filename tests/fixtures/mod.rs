//! Shared test fixtures for E2E CLI and web tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A two-layer 2×6 backup exercising every key category.
///
/// Layer 0 holds plain keys, a modifier and a layer switch; layer 1 holds
/// transparent keys, a default-layer change and empty cells.
pub fn vil_basic() -> Value {
    json!({
        "version": 1,
        "uid": 1234567890,
        "layout": [
            [
                ["KC_ESC", "KC_Q", "KC_W", "KC_E", "KC_R", "KC_T"],
                ["KC_LSFT", "KC_A", "KC_S", "KC_D", "MO(1)", -1]
            ],
            [
                ["KC_TRNS", "KC_1", "KC_2", "KC_3", "KC_TRNS", "KC_TRNS"],
                ["KC_TRNS", "DF(0)", -1, -1, "KC_TRNS", "LCTL(KC_C)"]
            ]
        ],
        "encoder_layout": [],
        "macro": []
    })
}

/// A backup with `count` single-row layers, each holding one distinct key.
pub fn vil_with_layers(count: usize) -> Value {
    let layers: Vec<Value> = (0..count)
        .map(|i| json!([[format!("KC_F{}", i + 1), "KC_TRNS", -1]]))
        .collect();
    json!({ "version": 1, "layout": layers })
}

/// A backup with an empty `layout` array.
pub fn vil_empty() -> Value {
    json!({ "version": 1, "layout": [] })
}

/// Writes a JSON value to `path`.
pub fn write_vil_file(vil: &Value, path: &Path) -> std::io::Result<()> {
    fs::write(path, serde_json::to_string_pretty(vil)?)
}

/// Creates a temporary `.vil` file (returns path and temp dir to keep it alive).
pub fn create_temp_vil_file(vil: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let vil_path = temp_dir.path().join("layout.vil");
    write_vil_file(vil, &vil_path).expect("Failed to write vil file");
    (vil_path, temp_dir)
}

/// Creates a temporary file with arbitrary (possibly invalid) content.
pub fn create_temp_raw_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_basic_shape() {
        let vil = vil_basic();
        let layers = vil["layout"].as_array().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].as_array().unwrap().len(), 2);
        assert_eq!(layers[0][0].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_fixture_with_layers() {
        assert_eq!(vil_with_layers(5)["layout"].as_array().unwrap().len(), 5);
    }
}
