//! Tests for data directory discovery

use super::*;
use crate::Error;
use crate::app::models::{DatasetKind, PartnerType};
use crate::app::services::dataset_loader::discover_datasets;

#[test]
fn test_discovers_catalog_files_in_catalog_order() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = create_test_data_dir(&temp_dir).unwrap();

    let found = discover_datasets(&data_dir).unwrap();

    assert_eq!(
        found,
        vec![
            DatasetKind::Installers,
            DatasetKind::Vehicles,
            DatasetKind::Partners(PartnerType::TowingCompanies),
        ]
    );
}

#[test]
fn test_ignores_unknown_and_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path();
    write_dataset(data_dir, "notes.csv", "a\n1\n").unwrap();
    write_dataset(data_dir, "vehicles.txt", "a\n1\n").unwrap();
    std::fs::create_dir_all(data_dir.join("archive")).unwrap();
    write_dataset(&data_dir.join("archive"), "locksmiths.csv", "a\n1\n").unwrap();
    write_dataset(data_dir, "repair-shops.csv", "a\n1\n").unwrap();

    let found = discover_datasets(data_dir).unwrap();

    assert_eq!(found, vec![DatasetKind::Partners(PartnerType::RepairShops)]);
}

#[test]
fn test_missing_directory() {
    let result = discover_datasets(std::path::Path::new("/no/such/techloc/data"));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
