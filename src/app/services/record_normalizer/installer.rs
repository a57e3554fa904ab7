//! Installer row normalization

use super::phone::format_phone_number;
use super::{NormalizeHelpers, details_of, or_placeholder, row_id};
use crate::app::models::{InstallerRecord, PartnerType};
use crate::app::services::coordinate_resolver::ResolveRequest;
use crate::app::services::field_extractor::LogicalField;
use crate::constants::{PLACEHOLDER_DASH, PLACEHOLDER_INSTALLER};
use serde_json::Value;

/// Normalize an installation company row
pub fn normalize_installer<H: NormalizeHelpers>(
    row: &Value,
    index: usize,
    helpers: &H,
) -> InstallerRecord {
    let f = |field| helpers.field(row, field);

    let company = or_placeholder(f(LogicalField::InstallerCompany), PLACEHOLDER_INSTALLER);
    let state = helpers
        .region_code(&f(LogicalField::InstallerState))
        .unwrap_or_else(|| helpers.default_region().to_string());
    let city = f(LogicalField::InstallerCity);
    let zip = f(LogicalField::InstallerZip);
    let seed = index as u64;

    let location = helpers.resolve(
        row,
        &ResolveRequest::new(&state)
            .with_zip(&zip)
            .with_city(&city)
            .with_seed(seed),
    );
    let phone = format_phone_number(&f(LogicalField::InstallerPhone));

    InstallerRecord {
        id: row_id(row).unwrap_or_else(|| index.to_string()),
        record_type: PartnerType::Technicians.as_str().to_string(),
        name: company.clone(),
        company,
        email: or_placeholder(f(LogicalField::InstallerEmail), PLACEHOLDER_DASH),
        phone: or_placeholder(phone.display, PLACEHOLDER_DASH),
        phone_dial: phone.dial,
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
