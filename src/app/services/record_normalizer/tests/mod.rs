//! Shared test utilities and fixtures for record normalizer tests

use crate::app::models::{Coordinates, LocationAccuracy, ResolvedLocation};
use crate::app::services::coordinate_resolver::{CoordinateResolver, ResolveRequest};
use crate::app::services::field_extractor::{FieldExtractor, LogicalField};
use crate::app::services::record_normalizer::NormalizeHelpers;
use crate::app::services::state_centers::StateCenterTable;
use serde_json::{Value, json};
use std::cell::RefCell;

pub mod installer_tests;

/// Resolver over a small table of real-ish region centers
pub fn create_test_resolver() -> CoordinateResolver {
    CoordinateResolver::new(StateCenterTable::from_entries([
        ("CA", Coordinates::new(36.116, -119.681)),
        ("TX", Coordinates::new(31.054, -97.563)),
        ("FL", Coordinates::new(27.766, -81.686)),
    ]))
}

/// Captured arguments of a resolve call
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveCall {
    pub zip: String,
    pub city: String,
    pub region_code: String,
    pub seed: u64,
    pub fallback: Option<Coordinates>,
}

/// Helpers that record resolve requests and answer with a fixed location
pub struct RecordingHelpers {
    pub extractor: FieldExtractor,
    pub answer: ResolvedLocation,
    pub calls: RefCell<Vec<ResolveCall>>,
}

impl RecordingHelpers {
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
            answer: ResolvedLocation::approximate(
                Coordinates::new(1.5, 2.5),
                LocationAccuracy::City,
            ),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> ResolveCall {
        self.calls.borrow().last().cloned().expect("resolve was called")
    }
}

impl NormalizeHelpers for RecordingHelpers {
    fn field(&self, row: &Value, field: LogicalField) -> String {
        self.extractor.field(row, field)
    }

    fn region_code(&self, raw: &str) -> Option<String> {
        crate::app::services::record_normalizer::canonical_region(raw)
    }

    fn resolve(&self, _row: &Value, request: &ResolveRequest<'_>) -> ResolvedLocation {
        self.calls.borrow_mut().push(ResolveCall {
            zip: request.zip.to_string(),
            city: request.city.to_string(),
            region_code: request.region_code.to_string(),
            seed: request.seed,
            fallback: request.fallback,
        });
        self.answer
    }
}

/// A vehicle export row with every commonly seen header
pub fn sample_vehicle_row() -> Value {
    json!({
        "Deal Status": "ACTIVE",
        "INV Prep Stat": "Ready",
        "Deal Completion": "42%",
        "Unit Type": "Truck",
        "Model Year": "2021",
        "Model": "F-150",
        "ShortVIN": "A12345",
        "GPS Fix": "Yes",
        "GPS Fix Reason": "",
        "Moving (Calc)": "No",
        "PT Status": "Online",
        "PT Serial ": "PT-998",
        "PT Last Read": "2024-03-01 10:00",
        "Days Stationary": "3",
        "State Loc": "texas",
        "PT City": "Austin",
        "PT ZipCode": "78701",
        "Lat": "30.2672",
        "Long": "-97.7431",
        "Customer ID": "CUST-7",
        "Payment Schedule": "Monthly"
    })
}
