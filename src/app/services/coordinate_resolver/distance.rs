//! Great-circle distance helpers for the map hotspot

use crate::app::models::Coordinates;
use crate::constants::{EARTH_RADIUS_MILES, HOTSPOT_RADIUS_MILES, MILES_TO_METERS};

/// Haversine distance in statute miles
pub fn distance_miles(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    EARTH_RADIUS_MILES * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

pub fn miles_to_meters(miles: f64) -> f64 {
    miles * MILES_TO_METERS
}

/// Hotspot circle radius in meters, as drawn by the map layer
pub fn hotspot_radius_meters() -> f64 {
    miles_to_meters(HOTSPOT_RADIUS_MILES)
}

/// Whether `point` falls inside the hotspot circle around `center`
pub fn within_hotspot(center: Coordinates, point: Coordinates) -> bool {
    distance_miles(center, point) <= HOTSPOT_RADIUS_MILES
}
