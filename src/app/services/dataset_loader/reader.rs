//! CSV dataset files → raw JSON rows
//!
//! Every row becomes an object keyed by the file's header line, values kept as
//! strings. Ragged rows are tolerated: missing trailing cells are simply
//! absent and extra cells are dropped.

use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Rows decoded from one file plus per-row decode failures
#[derive(Debug, Default)]
pub struct RawRows {
    pub rows: Vec<Value>,
    pub errors: Vec<String>,
}

/// Read a dataset file into raw rows
///
/// # Errors
/// * Returns `Error::FileNotFound` if the file does not exist
/// * Returns `Error::CsvParsing` if the header line cannot be read
pub fn read_csv_rows(path: &Path) -> Result<RawRows> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let rows = read_rows_from(file, &path.display().to_string())?;

    debug!(
        "Read {} rows from {} ({} rejected)",
        rows.rows.len(),
        path.display(),
        rows.errors.len()
    );
    Ok(rows)
}

/// Read raw rows from any CSV source; `label` names the source in errors
pub fn read_rows_from<R: Read>(source: R, label: &str) -> Result<RawRows> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(label, "Failed to read header line", Some(e)))?
        .clone();

    let mut raw = RawRows::default();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => raw.rows.push(row_object(&headers, &record)),
            Err(e) => {
                warn!("Skipping undecodable row {} in {}: {}", line + 1, label, e);
                raw.errors.push(format!("{} row {}: {}", label, line + 1, e));
            }
        }
    }

    Ok(raw)
}

/// Pair header names with cell values; the first of duplicate headers wins
fn row_object(headers: &StringRecord, record: &StringRecord) -> Value {
    let mut object = Map::new();
    for (header, value) in headers.iter().zip(record.iter()) {
        if header.trim().is_empty() {
            continue;
        }
        object
            .entry(header.to_string())
            .or_insert_with(|| Value::String(value.to_string()));
    }
    Value::Object(object)
}
