//! Header-tolerant field lookup for raw dataset rows
//!
//! Dataset exports disagree on header spelling (`PT City`, `pt_city`,
//! `City`, ...). The extractor tries each candidate key verbatim, lowercased
//! and snake_cased, then the same forms inside a nested `metadata` object, and
//! finally a normalized scan over the row's own keys. Values are returned as
//! trimmed text; anything absent or blank yields nothing.

use crate::constants::METADATA_KEY;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub mod synonyms;

#[cfg(test)]
mod tests;

pub use synonyms::LogicalField;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Normalize a header to its snake_case form: trim, lowercase, whitespace → `_`
pub fn normalize_key(key: &str) -> String {
    WHITESPACE_RUN
        .replace_all(key.trim(), "_")
        .to_lowercase()
}

/// Text form of a scalar JSON value, if non-blank
///
/// Strings, numbers and booleans count; null, arrays and objects are treated
/// as absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Looks up logical fields across header spelling variants
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First non-blank value among `keys`, or the empty string
    pub fn get(&self, row: &Value, keys: &[&str]) -> String {
        self.lookup(row, keys).unwrap_or_default()
    }

    /// First non-blank value among `keys`
    pub fn lookup(&self, row: &Value, keys: &[&str]) -> Option<String> {
        let object = row.as_object()?;

        if let Some(found) = lookup_in(object, keys) {
            return Some(found);
        }

        let metadata = object.get(METADATA_KEY).and_then(Value::as_object);
        if let Some(found) = metadata.and_then(|meta| lookup_in(meta, keys)) {
            return Some(found);
        }

        scan_normalized(object, keys).or_else(|| metadata.and_then(|meta| scan_normalized(meta, keys)))
    }

    /// Value of a declared logical field, or the empty string
    pub fn field(&self, row: &Value, field: LogicalField) -> String {
        self.get(row, field.synonyms())
    }

    /// Value of a declared logical field
    pub fn lookup_field(&self, row: &Value, field: LogicalField) -> Option<String> {
        self.lookup(row, field.synonyms())
    }
}

/// Verbatim, lowercased, then snake_cased forms of each key in order
fn lookup_in(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let lower = key.to_lowercase();
        let snake = normalize_key(key);
        [key.to_string(), lower, snake]
            .iter()
            .find_map(|candidate| object.get(candidate.as_str()).and_then(scalar_text))
    })
}

/// Match row keys and candidates after normalizing both sides
///
/// Each header is normalized once per scan; candidates keep priority order.
fn scan_normalized(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    let headers: Vec<(String, &Value)> = object
        .iter()
        .map(|(header, value)| (normalize_key(header), value))
        .collect();

    keys.iter().find_map(|key| {
        let wanted = normalize_key(key);
        headers
            .iter()
            .filter(|(header, _)| *header == wanted)
            .find_map(|(_, value)| scalar_text(value))
    })
}
