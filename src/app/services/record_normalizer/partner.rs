//! Service partner row normalization

use super::phone::format_phone_number;
use super::{NormalizeHelpers, details_of, or_placeholder, row_id};
use crate::app::models::{PartnerRecord, PartnerType};
use crate::app::services::coordinate_resolver::ResolveRequest;
use crate::app::services::field_extractor::LogicalField;
use crate::constants::PLACEHOLDER_PARTNER;
use serde_json::Value;

/// Normalize a service partner row of the given directory
pub fn normalize_partner<H: NormalizeHelpers>(
    row: &Value,
    partner_type: PartnerType,
    index: usize,
    helpers: &H,
) -> PartnerRecord {
    let f = |field| helpers.field(row, field);

    let state = helpers
        .region_code(&f(LogicalField::PartnerState))
        .unwrap_or_else(|| helpers.default_region().to_string());
    let city = f(LogicalField::PartnerCity);
    let zip = f(LogicalField::PartnerZip);
    let seed = index as u64;

    let location = helpers.resolve(
        row,
        &ResolveRequest::new(&state)
            .with_zip(&zip)
            .with_city(&city)
            .with_seed(seed),
    );
    let phone = format_phone_number(&f(LogicalField::PartnerPhone));

    PartnerRecord {
        id: row_id(row).unwrap_or_else(|| format!("{}-{}", partner_type, index)),
        partner_type: partner_type.as_str().to_string(),
        company: or_placeholder(f(LogicalField::PartnerCompany), PLACEHOLDER_PARTNER),
        region: or_placeholder(f(LogicalField::PartnerRegion), &state),
        phone: phone.display,
        phone_dial: phone.dial,
        contact: f(LogicalField::PartnerContact),
        availability: f(LogicalField::PartnerAvailability),
        authorization: f(LogicalField::PartnerAuthorization),
        notes: f(LogicalField::PartnerNotes),
        city,
        state,
        zip,
        lat: location.coordinates.lat,
        lng: location.coordinates.lng,
        location_accuracy: location.accuracy,
        details: details_of(row),
        seed,
    }
}
