//! Tests for distance helpers

use super::*;
use crate::app::services::coordinate_resolver::distance::{
    distance_miles, hotspot_radius_meters, miles_to_meters, within_hotspot,
};

const LOS_ANGELES: Coordinates = Coordinates::new(34.0522, -118.2437);
const NEW_YORK: Coordinates = Coordinates::new(40.7128, -74.0060);

#[test]
fn test_distance_to_self_is_zero() {
    assert!(distance_miles(LOS_ANGELES, LOS_ANGELES).abs() < 1e-9);
}

#[test]
fn test_distance_is_symmetric_and_plausible() {
    let there = distance_miles(LOS_ANGELES, NEW_YORK);
    let back = distance_miles(NEW_YORK, LOS_ANGELES);
    assert!((there - back).abs() < 1e-9);
    assert!((2430.0..2460.0).contains(&there), "got {there}");
}

#[test]
fn test_hotspot() {
    assert!((miles_to_meters(1.0) - 1609.34).abs() < 1e-9);
    assert!((hotspot_radius_meters() - 80_467.0).abs() < 1.0);

    let nearby = Coordinates::new(34.2, -118.4);
    assert!(within_hotspot(LOS_ANGELES, nearby));
    assert!(!within_hotspot(LOS_ANGELES, NEW_YORK));
}
