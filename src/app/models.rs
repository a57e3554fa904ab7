//! Data models for Techloc
//!
//! This module contains the core data structures: coordinates and their
//! accuracy tier, the dataset catalog, and the display-ready records produced
//! by the normalizers.

use crate::constants::DATASET_NAMES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Coordinates
// =============================================================================

/// A WGS84 latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Finite and neither component is exactly zero
    ///
    /// Exports use `0` as a "no fix" marker, so a zero component never counts
    /// as a real position.
    pub fn is_usable_fix(&self) -> bool {
        self.is_finite() && self.lat != 0.0 && self.lng != 0.0
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

// =============================================================================
// Accuracy
// =============================================================================

/// How specific the input behind a coordinate was
///
/// Ordered from least to most specific, so `Exact > Zip > City > State`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LocationAccuracy {
    /// Region center only
    State,
    /// Placed around the region center from the city name
    City,
    /// Placed around the region center from the postal code
    Zip,
    /// Coordinates came with the record
    Exact,
}

impl LocationAccuracy {
    pub const ALL: [LocationAccuracy; 4] = [
        LocationAccuracy::Exact,
        LocationAccuracy::Zip,
        LocationAccuracy::City,
        LocationAccuracy::State,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationAccuracy::Exact => "exact",
            LocationAccuracy::Zip => "zip",
            LocationAccuracy::City => "city",
            LocationAccuracy::State => "state",
        }
    }
}

impl fmt::Display for LocationAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationAccuracy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(LocationAccuracy::Exact),
            "zip" => Ok(LocationAccuracy::Zip),
            "city" => Ok(LocationAccuracy::City),
            "state" => Ok(LocationAccuracy::State),
            other => Err(Error::configuration(format!(
                "Unknown location accuracy '{}'",
                other
            ))),
        }
    }
}

/// Result of a single coordinate resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub has_exact_coordinates: bool,
    pub accuracy: LocationAccuracy,
}

impl ResolvedLocation {
    pub fn exact(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            has_exact_coordinates: true,
            accuracy: LocationAccuracy::Exact,
        }
    }

    pub fn approximate(coordinates: Coordinates, accuracy: LocationAccuracy) -> Self {
        Self {
            coordinates,
            has_exact_coordinates: false,
            accuracy,
        }
    }

    /// The position is a display approximation, not a geocoded address
    pub fn is_approximate(&self) -> bool {
        self.accuracy != LocationAccuracy::Exact
    }
}

// =============================================================================
// Phone Numbers
// =============================================================================

/// A phone number split into its display form and dialable digits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub display: String,
    pub dial: String,
}

// =============================================================================
// Dataset Catalog
// =============================================================================

/// Service-partner directories shown alongside installers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerType {
    TowingCompanies,
    Resellers,
    RepairShops,
    Locksmiths,
    Dispatchers,
    Technicians,
    Inspectors,
}

impl PartnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::TowingCompanies => "towing_companies",
            PartnerType::Resellers => "resellers",
            PartnerType::RepairShops => "repair_shops",
            PartnerType::Locksmiths => "locksmiths",
            PartnerType::Dispatchers => "dispatchers",
            PartnerType::Technicians => "technicians",
            PartnerType::Inspectors => "inspectors",
        }
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset served from the dashboard data directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Installers,
    Vehicles,
    Partners(PartnerType),
}

impl DatasetKind {
    /// Every dataset in catalog order
    pub fn all() -> Vec<DatasetKind> {
        DATASET_NAMES
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Installers => "installers",
            DatasetKind::Vehicles => "vehicles",
            DatasetKind::Partners(partner) => partner.as_str(),
        }
    }

    /// File name of the dataset inside the data directory
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name(), crate::constants::DATASET_FILE_EXTENSION)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_lowercase().replace('-', "_").as_str() {
            "installers" => DatasetKind::Installers,
            "vehicles" => DatasetKind::Vehicles,
            "towing_companies" => DatasetKind::Partners(PartnerType::TowingCompanies),
            "resellers" => DatasetKind::Partners(PartnerType::Resellers),
            "repair_shops" => DatasetKind::Partners(PartnerType::RepairShops),
            "locksmiths" => DatasetKind::Partners(PartnerType::Locksmiths),
            "dispatchers" => DatasetKind::Partners(PartnerType::Dispatchers),
            "technicians" => DatasetKind::Partners(PartnerType::Technicians),
            "inspectors" => DatasetKind::Partners(PartnerType::Inspectors),
            _ => return Err(Error::unknown_dataset(s)),
        };
        Ok(kind)
    }
}

// =============================================================================
// Normalized Records
// =============================================================================

/// A tracked vehicle as shown on the fleet map and table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub status: String,
    pub inv_prep_status: String,
    pub deal_completion: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub year: String,
    pub model: String,
    pub vin: String,
    pub gps_fix: String,
    pub gps_reason: String,
    pub gps_moving: String,
    pub moving: String,
    pub moving_calc: String,
    pub pt_status: String,
    pub pt_serial: String,
    pub encore_serial: String,
    pub last_read: String,
    pub days_stationary: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
    pub lat: f64,
    pub lng: f64,
    pub location_accuracy: LocationAccuracy,
    pub customer_id: String,
    pub customer: String,
    pub last_location: String,
    pub payment: String,
    /// Lowercased text used for client-side substring search
    pub search_blob: String,
    pub details: Value,
}

impl VehicleRecord {
    /// Case-insensitive substring match against the search blob
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.search_blob.contains(&needle)
    }
}

/// An installation company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub phone_dial: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lng: f64,
    pub location_accuracy: LocationAccuracy,
    pub details: Value,
    pub seed: u64,
}

/// A service partner (towing, locksmith, repair shop, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub partner_type: String,
    pub company: String,
    pub region: String,
    pub phone: String,
    pub phone_dial: String,
    pub contact: String,
    pub availability: String,
    pub authorization: String,
    pub notes: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lng: f64,
    pub location_accuracy: LocationAccuracy,
    pub details: Value,
    pub seed: u64,
}

/// Any normalized record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedRecord {
    Vehicle(VehicleRecord),
    Installer(InstallerRecord),
    Partner(PartnerRecord),
}

impl NormalizedRecord {
    pub fn id(&self) -> &str {
        match self {
            NormalizedRecord::Vehicle(v) => &v.id,
            NormalizedRecord::Installer(i) => &i.id,
            NormalizedRecord::Partner(p) => &p.id,
        }
    }

    /// Primary display label
    pub fn label(&self) -> &str {
        match self {
            NormalizedRecord::Vehicle(v) => &v.model,
            NormalizedRecord::Installer(i) => &i.company,
            NormalizedRecord::Partner(p) => &p.company,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        match self {
            NormalizedRecord::Vehicle(v) => Coordinates::new(v.lat, v.lng),
            NormalizedRecord::Installer(i) => Coordinates::new(i.lat, i.lng),
            NormalizedRecord::Partner(p) => Coordinates::new(p.lat, p.lng),
        }
    }

    pub fn accuracy(&self) -> LocationAccuracy {
        match self {
            NormalizedRecord::Vehicle(v) => v.location_accuracy,
            NormalizedRecord::Installer(i) => i.location_accuracy,
            NormalizedRecord::Partner(p) => p.location_accuracy,
        }
    }

    pub fn state(&self) -> &str {
        match self {
            NormalizedRecord::Vehicle(v) => &v.state,
            NormalizedRecord::Installer(i) => &i.state,
            NormalizedRecord::Partner(p) => &p.state,
        }
    }

    pub fn city(&self) -> &str {
        match self {
            NormalizedRecord::Vehicle(v) => &v.city,
            NormalizedRecord::Installer(i) => &i.city,
            NormalizedRecord::Partner(p) => &p.city,
        }
    }
}
