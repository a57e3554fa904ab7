//! Shared test utilities and fixtures for region center tests

use std::fs;
use std::path::{Path, PathBuf};


/// A small but realistic state centers resource
pub const SAMPLE_CENTERS_JSON: &str = r#"{
  "CA": [36.116, -119.681],
  "TX": [31.054, -97.563],
  "NY": [42.165, -74.948],
  "FL": [27.766, -81.686],
  "DEFAULT": [39.8, -98.5]
}"#;

/// Write a centers resource into `dir` and return its path
pub fn write_centers_file(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join("state-centers.json");
    fs::write(&path, content)?;
    Ok(path)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
