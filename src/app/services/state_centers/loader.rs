//! Region center table loading
//!
//! The resource is a JSON object of `"CODE": [lat, lng]` pairs plus a required
//! `"DEFAULT"` pair. `load` never fails: a missing or malformed resource
//! degrades to a default-only table so resolution falls back to state-level
//! accuracy instead of erroring.

use super::StateCenterTable;
use super::metadata::CenterLoadStats;
use crate::app::models::Coordinates;
use crate::constants::DEFAULT_REGION_KEY;
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

impl StateCenterTable {
    /// Load the table, recovering from any failure with a default-only table
    pub async fn load(path: &Path) -> Self {
        match Self::try_load(path).await {
            Ok((table, stats)) => {
                info!("{}", stats.summary());
                table
            }
            Err(e) => {
                error!(
                    "Failed to load state centers configuration from {}: {}",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// Load the table, surfacing read and parse errors
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the resource does not exist
    /// * Returns `Error::Io` for read failures
    /// * Returns `Error::StateCenters` if the JSON is not an object
    pub async fn try_load(path: &Path) -> Result<(Self, CenterLoadStats)> {
        let start_time = Instant::now();

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(
                format!("Failed to read state centers file {}", path.display()),
                e,
            )
        })?;

        let (mut table, mut stats) =
            Self::from_json_str(&content, &path.display().to_string())?;
        table.source = Some(path.to_path_buf());
        stats.load_duration = start_time.elapsed();

        Ok((table, stats))
    }

    /// Parse the table from JSON text
    ///
    /// Individual bad entries are skipped and recorded in the stats; only a
    /// non-object document is an error.
    pub fn from_json_str(json: &str, source_label: &str) -> Result<(Self, CenterLoadStats)> {
        let document: Value = serde_json::from_str(json).map_err(|e| {
            Error::state_centers(source_label, format!("Invalid JSON: {}", e))
        })?;

        // A JSON null behaves like an empty resource
        let entries = match document {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(Error::state_centers(
                    source_label,
                    format!("Expected an object of region centers, found {}", json_kind(&other)),
                ));
            }
        };

        let mut stats = CenterLoadStats::new();
        let mut centers = HashMap::with_capacity(entries.len());

        for (code, value) in entries {
            stats.entries_found += 1;
            match parse_center(&value) {
                Some(center) => {
                    centers.insert(code, center);
                    stats.entries_loaded += 1;
                }
                None => {
                    warn!(
                        "Skipping region center '{}' in {}: expected [lat, lng], found {}",
                        code, source_label, value
                    );
                    stats.entries_skipped += 1;
                    stats
                        .errors
                        .push(format!("{}: invalid center for '{}'", source_label, code));
                }
            }
        }

        if !centers.contains_key(DEFAULT_REGION_KEY) {
            warn!(
                "State centers in {} have no usable {} entry, using built-in center",
                source_label, DEFAULT_REGION_KEY
            );
            stats.default_patched = true;
            stats.entries_loaded += 1;
        }

        let table = Self::from_entries(centers);
        debug!(
            "Parsed {} region centers from {}",
            table.region_count(),
            source_label
        );

        Ok((table, stats))
    }
}

/// A center must be an array of exactly two finite numbers
fn parse_center(value: &Value) -> Option<Coordinates> {
    let pair = value.as_array()?;
    if pair.len() != 2 {
        return None;
    }
    let center = Coordinates::new(pair[0].as_f64()?, pair[1].as_f64()?);
    center.is_finite().then_some(center)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
