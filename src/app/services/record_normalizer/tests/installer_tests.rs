//! Tests for installer normalization

use super::*;
use crate::app::services::record_normalizer::{DefaultHelpers, normalize_installer};

#[test]
fn test_installer_row() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let row = json!({
        "Installation Company": "Lone Star Installs",
        "State": "tx",
        "City": "Dallas",
        "Zip": "75201",
        "Email": "ops@lonestar.example",
        "Phone": "1 (214) 555-0100"
    });

    let installer = normalize_installer(&row, 3, &helpers);

    assert_eq!(installer.id, "3");
    assert_eq!(installer.record_type, "technicians");
    assert_eq!(installer.company, "Lone Star Installs");
    assert_eq!(installer.name, "Lone Star Installs");
    assert_eq!(installer.state, "TX");
    assert_eq!(installer.city, "Dallas");
    assert_eq!(installer.zip, "75201");
    assert_eq!(installer.email, "ops@lonestar.example");
    assert_eq!(installer.phone, "214-555-0100");
    assert_eq!(installer.phone_dial, "12145550100");
    assert_eq!(installer.seed, 3);
    assert_eq!(installer.location_accuracy, LocationAccuracy::Zip);
}

#[test]
fn test_company_name_wins_over_other_spellings() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let row = json!({ "company_name": "Primary", "Company": "Secondary", "name": "Third" });

    assert_eq!(normalize_installer(&row, 0, &helpers).company, "Primary");
}

#[test]
fn test_missing_fields_get_placeholders() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let installer = normalize_installer(&json!({}), 5, &helpers);

    assert_eq!(installer.company, "Installer");
    assert_eq!(installer.name, "Installer");
    assert_eq!(installer.email, "-");
    assert_eq!(installer.phone, "-");
    assert_eq!(installer.phone_dial, "");
    assert_eq!(installer.state, "US");
    assert_eq!(installer.location_accuracy, LocationAccuracy::State);
    assert!(installer.lat.is_finite() && installer.lng.is_finite());
}

#[test]
fn test_full_state_name_is_shortened() {
    let helpers = RecordingHelpers::new();
    let installer = normalize_installer(&json!({ "state": "california", "city": "Fresno" }), 8, &helpers);

    assert_eq!(installer.state, "CA");
    let call = helpers.last_call();
    assert_eq!(call.region_code, "CA");
    assert_eq!(call.city, "Fresno");
    assert_eq!(call.seed, 8);
    assert_eq!(call.fallback, None);
}

#[test]
fn test_explicit_coordinates_are_exact() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let row = json!({ "company": "Pin Drop", "state": "FL", "latitude": 25.76, "longitude": "-80.19" });

    let installer = normalize_installer(&row, 0, &helpers);

    assert_eq!(installer.location_accuracy, LocationAccuracy::Exact);
    assert_eq!(installer.lat, 25.76);
    assert_eq!(installer.lng, -80.19);
}

#[test]
fn test_metadata_fields_are_read() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let row = json!({
        "id": "inst-1",
        "metadata": { "Company": "Nested Co", "City": "Tampa", "State": "FL" }
    });

    let installer = normalize_installer(&row, 0, &helpers);

    assert_eq!(installer.id, "inst-1");
    assert_eq!(installer.company, "Nested Co");
    assert_eq!(installer.city, "Tampa");
    assert_eq!(installer.location_accuracy, LocationAccuracy::City);
}

#[test]
fn test_configured_default_region() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver).with_default_region("TX");
    let installer = normalize_installer(&json!({ "company": "No State" }), 0, &helpers);

    assert_eq!(installer.state, "TX");
    assert_eq!(installer.lat, 31.054);
    assert_eq!(installer.lng, -97.563);
}

#[test]
fn test_non_ascii_phone_digits() {
    let resolver = create_test_resolver();
    let helpers = DefaultHelpers::new(&resolver);
    let row = json!({ "Company": "Arabic Digits Co", "Phone": "٠١٢٣٤" });

    let installer = normalize_installer(&row, 0, &helpers);

    assert_eq!(installer.phone, "٠١٢٣٤");
    assert_eq!(installer.phone_dial, "٠١٢٣٤");
}
