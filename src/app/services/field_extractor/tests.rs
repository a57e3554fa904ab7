use super::*;
use serde_json::json;

#[test]
fn test_normalize_key() {
    assert_eq!(normalize_key("PT City"), "pt_city");
    assert_eq!(normalize_key("  Days   Stationary "), "days_stationary");
    assert_eq!(normalize_key("PT Serial "), "pt_serial");
    assert_eq!(normalize_key("zip"), "zip");
}

#[test]
fn test_verbatim_then_lower_then_snake() {
    let extractor = FieldExtractor::new();

    let row = json!({ "PT City": "Austin" });
    assert_eq!(extractor.get(&row, &["PT City"]), "Austin");

    let row = json!({ "pt city": "Austin" });
    assert_eq!(extractor.get(&row, &["PT City"]), "Austin");

    let row = json!({ "pt_city": "Austin" });
    assert_eq!(extractor.get(&row, &["PT City"]), "Austin");
}

#[test]
fn test_candidate_order_wins_over_form_order() {
    let extractor = FieldExtractor::new();
    // "state loc" (lowercased first candidate) beats "State" (verbatim second)
    let row = json!({ "state loc": "TX", "State": "CA" });
    assert_eq!(extractor.get(&row, &["State Loc", "State"]), "TX");
}

#[test]
fn test_blank_values_are_skipped() {
    let extractor = FieldExtractor::new();
    let row = json!({ "Zip": "   ", "zip": null, "zipcode": "78701" });
    assert_eq!(extractor.get(&row, &["Zip", "zipcode"]), "78701");
}

#[test]
fn test_values_are_trimmed_and_scalars_stringified() {
    let extractor = FieldExtractor::new();
    let row = json!({ "Lat": 30.25, "Moving": true, "City": "  Austin  " });
    assert_eq!(extractor.get(&row, &["Lat"]), "30.25");
    assert_eq!(extractor.get(&row, &["Moving"]), "true");
    assert_eq!(extractor.get(&row, &["City"]), "Austin");
}

#[test]
fn test_arrays_and_objects_are_absent() {
    let extractor = FieldExtractor::new();
    let row = json!({ "City": ["Austin"], "Zip": { "code": "78701" } });
    assert_eq!(extractor.lookup(&row, &["City", "Zip"]), None);
}

#[test]
fn test_metadata_fallback() {
    let extractor = FieldExtractor::new();
    let row = json!({
        "company": "",
        "metadata": { "Postal Code": "10001", "company_name": "Acme Towing" }
    });

    assert_eq!(extractor.get(&row, &["company_name", "company"]), "Acme Towing");
    assert_eq!(extractor.get(&row, &["postal_code"]), "10001");
}

#[test]
fn test_top_level_wins_over_metadata() {
    let extractor = FieldExtractor::new();
    let row = json!({ "city": "Dallas", "metadata": { "city": "Houston" } });
    assert_eq!(extractor.get(&row, &["city"]), "Dallas");
}

#[test]
fn test_normalized_scan_matches_mixed_case_headers() {
    let extractor = FieldExtractor::new();
    let row = json!({ "Pt  CITY": "El Paso" });
    assert_eq!(extractor.get(&row, &["PT City"]), "El Paso");
}

#[test]
fn test_normalized_scan_keeps_candidate_priority() {
    let extractor = FieldExtractor::new();

    // Header order does not matter, the earlier candidate wins
    let row = json!({ " Postal  Code ": "1", "ZIP\tCODE": "2" });
    assert_eq!(extractor.get(&row, &["Zip Code", "Postal Code"]), "2");

    // A blank normalized match falls through to the next candidate
    let row = json!({ "ZIP  CODE": "  ", " postal code": "9" });
    assert_eq!(extractor.get(&row, &["Zip Code", "Postal Code"]), "9");
}

#[test]
fn test_malformed_rows_degrade_to_empty() {
    let extractor = FieldExtractor::new();
    assert_eq!(extractor.get(&Value::Null, &["City"]), "");
    assert_eq!(extractor.get(&json!("Austin"), &["City"]), "");
    assert_eq!(extractor.get(&json!([1, 2]), &["City"]), "");
    assert_eq!(extractor.get(&json!({}), &[]), "");
    assert_eq!(extractor.get(&json!({ "metadata": "oops" }), &["City"]), "");
}

#[test]
fn test_logical_field_lookup() {
    let extractor = FieldExtractor::new();
    let row = json!({ "ShortVIN": "4T1BF1FK", "Unit Type": "Truck" });
    assert_eq!(extractor.field(&row, LogicalField::Vin), "4T1BF1FK");
    assert_eq!(extractor.field(&row, LogicalField::UnitType), "Truck");
    assert_eq!(extractor.lookup_field(&row, LogicalField::Model), None);
}
