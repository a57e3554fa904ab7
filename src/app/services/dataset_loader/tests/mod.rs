//! Shared test utilities and fixtures for dataset loader tests

use crate::config::TechlocConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod discovery_tests;

pub const VEHICLES_CSV: &str = "\
Model,ShortVIN,State Loc,PT City,PT ZipCode,Lat,Long,Customer ID
F-150,A1,TX,Austin,78701,30.2672,-97.7431,C-1
Silverado,B2,TX,Waco,76701,,,C-2
Tacoma,C3,CA,Fresno,,,,C-3
Ranger,D4,FL,,,,,C-4
";

pub const TOWING_CSV: &str = "\
company,state,city,zip,phone
Hook & Haul,TX,Waco,76701,254-555-0199
Night Owl Towing,CA,,,
";

pub const INSTALLERS_CSV: &str = "\
Installation Company,State,City,Email,Phone
Lone Star Installs,TX,Dallas,ops@lonestar.example,2145550100
";

pub const CENTERS_JSON: &str = r#"{
  "CA": [36.116, -119.681],
  "TX": [31.054, -97.563],
  "FL": [27.766, -81.686],
  "DEFAULT": [39.8, -98.5]
}"#;

/// Populate a data directory with a few datasets and a centers file
pub fn create_test_data_dir(temp_dir: &TempDir) -> std::io::Result<PathBuf> {
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir)?;
    write_dataset(&data_dir, "vehicles.csv", VEHICLES_CSV)?;
    write_dataset(&data_dir, "towing_companies.csv", TOWING_CSV)?;
    write_dataset(&data_dir, "installers.csv", INSTALLERS_CSV)?;
    write_dataset(&data_dir, "state-centers.json", CENTERS_JSON)?;
    Ok(data_dir)
}

pub fn write_dataset(dir: &Path, file_name: &str, content: &str) -> std::io::Result<()> {
    fs::write(dir.join(file_name), content)
}

pub fn test_config(data_dir: &Path) -> TechlocConfig {
    TechlocConfig::default()
        .with_data_dir(data_dir)
        .without_progress()
}
