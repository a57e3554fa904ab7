//! Record normalization for vehicle, installer and partner rows
//!
//! Each normalizer is a pure function of `(row, index, helpers)`. The helpers
//! bundle field lookup, region canonicalization and coordinate resolution
//! behind [`NormalizeHelpers`] so tests can substitute any of them.
//!
//! ## Architecture
//!
//! - [`vehicle`] - fleet rows with tracker status and search text
//! - [`installer`] - installation companies
//! - [`partner`] - service partner directories
//! - [`phone`] - phone display formatting
//! - [`region`] - region code canonicalization

use crate::app::models::{DatasetKind, NormalizedRecord, ResolvedLocation};
use crate::app::services::coordinate_resolver::{CoordinateResolver, ResolveRequest};
use crate::app::services::field_extractor::{FieldExtractor, LogicalField, scalar_text};
use crate::constants::FALLBACK_REGION_CODE;
use serde_json::{Value, json};

pub mod installer;
pub mod partner;
pub mod phone;
pub mod region;
pub mod vehicle;

#[cfg(test)]
pub mod tests;

pub use installer::normalize_installer;
pub use partner::normalize_partner;
pub use phone::format_phone_number;
pub use region::{canonical_region, to_region_code};
pub use vehicle::normalize_vehicle;

/// Collaborators used by the normalizers
pub trait NormalizeHelpers {
    /// Value of a logical field, or the empty string
    fn field(&self, row: &Value, field: LogicalField) -> String;

    /// Canonical region code, `None` when the raw value is blank
    fn region_code(&self, raw: &str) -> Option<String>;

    /// Coordinates for the row
    fn resolve(&self, row: &Value, request: &ResolveRequest<'_>) -> ResolvedLocation;

    /// Region code assumed for installer and partner rows that carry none
    fn default_region(&self) -> &str {
        FALLBACK_REGION_CODE
    }
}

/// Production helpers: header-tolerant lookup and the shared resolver
#[derive(Debug, Clone, Copy)]
pub struct DefaultHelpers<'a> {
    extractor: FieldExtractor,
    resolver: &'a CoordinateResolver,
    default_region: &'a str,
}

impl<'a> DefaultHelpers<'a> {
    pub fn new(resolver: &'a CoordinateResolver) -> Self {
        Self {
            extractor: FieldExtractor::new(),
            resolver,
            default_region: FALLBACK_REGION_CODE,
        }
    }

    /// Use a configured region code instead of `US` for rows without one
    pub fn with_default_region(mut self, region: &'a str) -> Self {
        self.default_region = region;
        self
    }
}

impl NormalizeHelpers for DefaultHelpers<'_> {
    fn field(&self, row: &Value, field: LogicalField) -> String {
        self.extractor.field(row, field)
    }

    fn region_code(&self, raw: &str) -> Option<String> {
        canonical_region(raw)
    }

    fn resolve(&self, row: &Value, request: &ResolveRequest<'_>) -> ResolvedLocation {
        self.resolver.resolve(row, request)
    }

    fn default_region(&self) -> &str {
        self.default_region
    }
}

/// Normalize a row of the given dataset
pub fn normalize_record<H: NormalizeHelpers>(
    kind: DatasetKind,
    row: &Value,
    index: usize,
    helpers: &H,
) -> NormalizedRecord {
    match kind {
        DatasetKind::Vehicles => NormalizedRecord::Vehicle(normalize_vehicle(row, index, helpers)),
        DatasetKind::Installers => {
            NormalizedRecord::Installer(normalize_installer(row, index, helpers))
        }
        DatasetKind::Partners(partner_type) => {
            NormalizedRecord::Partner(normalize_partner(row, partner_type, index, helpers))
        }
    }
}

/// The row's own `id`, if it carries one
pub(crate) fn row_id(row: &Value) -> Option<String> {
    row.get("id").and_then(scalar_text)
}

/// Raw row kept on the record; a missing row becomes an empty object
pub(crate) fn details_of(row: &Value) -> Value {
    if row.is_null() { json!({}) } else { row.clone() }
}

pub(crate) fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}
