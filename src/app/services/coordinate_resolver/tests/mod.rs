//! Shared test utilities and fixtures for coordinate resolution tests

use crate::app::models::Coordinates;
use crate::app::services::coordinate_resolver::CoordinateResolver;
use crate::app::services::state_centers::StateCenterTable;

pub mod distance_tests;

pub const CA_CENTER: Coordinates = Coordinates::new(36.116, -119.681);
pub const TX_CENTER: Coordinates = Coordinates::new(31.054, -97.563);

/// Resolver over a two-region table
pub fn create_test_resolver() -> CoordinateResolver {
    CoordinateResolver::new(StateCenterTable::from_entries([
        ("CA", CA_CENTER),
        ("TX", TX_CENTER),
    ]))
}

pub fn assert_coords_close(actual: Coordinates, expected: Coordinates, tolerance: f64) {
    assert!(
        (actual.lat - expected.lat).abs() < tolerance && (actual.lng - expected.lng).abs() < tolerance,
        "expected ({}, {}), got ({}, {})",
        expected.lat,
        expected.lng,
        actual.lat,
        actual.lng
    );
}
