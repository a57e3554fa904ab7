//! Vehicle row normalization

use super::{NormalizeHelpers, details_of, or_placeholder, row_id};
use crate::app::models::{Coordinates, VehicleRecord};
use crate::app::services::coordinate_resolver::ResolveRequest;
use crate::app::services::coordinate_resolver::placement::parse_leading_f64;
use crate::app::services::field_extractor::LogicalField;
use crate::constants::{
    DEFAULT_COUNTRY_LABEL, DEFAULT_VEHICLE_STATUS, FALLBACK_REGION_CODE, PLACEHOLDER_UNKNOWN,
    PLACEHOLDER_UNKNOWN_AREA, PLACEHOLDER_VEHICLE, PLACEHOLDER_VIN,
};
use serde_json::Value;

/// Normalize a fleet row
///
/// Unlike partner rows, a vehicle without a region keeps an empty `state` so
/// the customer and location labels can say so.
pub fn normalize_vehicle<H: NormalizeHelpers>(
    row: &Value,
    index: usize,
    helpers: &H,
) -> VehicleRecord {
    let f = |field| helpers.field(row, field);

    let state = helpers
        .region_code(&f(LogicalField::VehicleState))
        .unwrap_or_default();
    let city = f(LogicalField::VehicleCity);
    let zip = f(LogicalField::VehicleZip);

    let tracker_fix = match (
        parse_leading_f64(&f(LogicalField::VehicleLatitude)),
        parse_leading_f64(&f(LogicalField::VehicleLongitude)),
    ) {
        (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)).filter(Coordinates::is_usable_fix),
        _ => None,
    };

    let location = helpers.resolve(
        row,
        &ResolveRequest::new(&state)
            .with_zip(&zip)
            .with_city(&city)
            .with_seed(index as u64)
            .with_fallback(tracker_fix),
    );

    let customer = if city.is_empty() {
        or_placeholder(state.clone(), PLACEHOLDER_UNKNOWN_AREA)
    } else {
        format!(
            "{}, {}",
            city,
            or_placeholder(state.clone(), FALLBACK_REGION_CODE)
        )
    };

    let last_location = {
        let place = format!(
            "{}, {}",
            or_placeholder(city.clone(), PLACEHOLDER_UNKNOWN),
            or_placeholder(state.clone(), DEFAULT_COUNTRY_LABEL)
        );
        if zip.is_empty() {
            place
        } else {
            format!("{} {}", place, zip)
        }
    };

    let model = or_placeholder(f(LogicalField::Model), PLACEHOLDER_VEHICLE);
    let vin = or_placeholder(f(LogicalField::Vin), PLACEHOLDER_VIN);
    let customer_id = f(LogicalField::CustomerId);

    let search_blob = format!(
        "{} {} {} {} {}",
        model, vin, last_location, customer_id, customer
    )
    .to_lowercase();

    VehicleRecord {
        id: row_id(row).unwrap_or_else(|| index.to_string()),
        status: or_placeholder(f(LogicalField::DealStatus), DEFAULT_VEHICLE_STATUS),
        inv_prep_status: f(LogicalField::InvPrepStatus),
        deal_completion: f(LogicalField::DealCompletion),
        unit_type: or_placeholder(f(LogicalField::UnitType), PLACEHOLDER_VEHICLE),
        year: f(LogicalField::ModelYear),
        model,
        vin,
        gps_fix: f(LogicalField::GpsFix),
        gps_reason: f(LogicalField::GpsFixReason),
        gps_moving: f(LogicalField::GpsMoving),
        moving: f(LogicalField::Moving),
        moving_calc: f(LogicalField::MovingCalc),
        pt_status: f(LogicalField::PtStatus),
        pt_serial: f(LogicalField::PtSerial),
        encore_serial: f(LogicalField::EncoreSerial),
        last_read: f(LogicalField::PtLastRead),
        days_stationary: f(LogicalField::DaysStationary),
        state,
        city,
        zipcode: zip,
        lat: location.coordinates.lat,
        lng: location.coordinates.lng,
        location_accuracy: location.accuracy,
        customer_id,
        customer,
        last_location,
        payment: f(LogicalField::PaymentSchedule),
        search_blob,
        details: details_of(row),
    }
}
