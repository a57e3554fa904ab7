//! Application constants for Techloc
//!
//! This module contains placement constants, header synonyms, dataset names
//! and the small fixed vocabularies shared with the web shell.

// =============================================================================
// Region Centers
// =============================================================================

/// Key of the required fallback entry in the state center table
pub const DEFAULT_REGION_KEY: &str = "DEFAULT";

/// Continental US centroid used when the table has no usable `DEFAULT`
pub const DEFAULT_STATE_CENTER: (f64, f64) = (39.8, -98.5);

/// Region code used when a row carries no region at all
pub const FALLBACK_REGION_CODE: &str = "US";

/// Default state center resource file name
pub const STATE_CENTERS_FILE_NAME: &str = "state-centers.json";

// =============================================================================
// Approximate Placement
// =============================================================================

/// Parameters for the postal-code and city placement heuristics
///
/// Both heuristics place a point on a ring around the region center. The
/// angle comes from `hash mod 360` degrees and the radius (in degrees) from
/// `base + (hash mod radius_modulus) / radius_divisor`.
pub mod placement {
    /// Minimum ring radius for postal-code placement
    pub const ZIP_RADIUS_BASE: f64 = 0.15;
    pub const ZIP_RADIUS_MODULUS: u64 = 700;
    pub const ZIP_RADIUS_DIVISOR: f64 = 1200.0;
    /// Longitude stretch for postal-code placement
    pub const ZIP_LNG_SCALE: f64 = 1.3;

    /// Minimum ring radius for city placement
    pub const CITY_RADIUS_BASE: f64 = 0.18;
    pub const CITY_RADIUS_MODULUS: u64 = 500;
    pub const CITY_RADIUS_DIVISOR: f64 = 1400.0;
    /// Longitude stretch for city placement
    pub const CITY_LNG_SCALE: f64 = 1.25;

    /// Seed substituted when the caller passes zero
    pub const CITY_ZERO_SEED: u64 = 1;

    pub const ANGLE_MODULUS: u64 = 360;
}

// =============================================================================
// Distance
// =============================================================================

/// Mean Earth radius in statute miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

pub const MILES_TO_METERS: f64 = 1609.34;

/// Radius of the map hotspot circle drawn around a selected record
pub const HOTSPOT_RADIUS_MILES: f64 = 50.0;

// =============================================================================
// Header Synonyms
// =============================================================================

/// Header spellings checked for an explicit latitude
pub const LATITUDE_KEYS: &[&str] = &["lat", "Lat", "latitude", "Latitude"];

/// Header spellings checked for an explicit longitude
pub const LONGITUDE_KEYS: &[&str] = &["lng", "Lng", "long", "Long", "longitude", "Longitude"];

/// Nested object searched after the top-level row
pub const METADATA_KEY: &str = "metadata";

// =============================================================================
// Display Placeholders
// =============================================================================

pub const PLACEHOLDER_DASH: &str = "-";
pub const PLACEHOLDER_UNKNOWN: &str = "Unknown";
pub const PLACEHOLDER_UNKNOWN_AREA: &str = "Unknown area";
pub const PLACEHOLDER_VEHICLE: &str = "Vehicle";
pub const PLACEHOLDER_VIN: &str = "N/A";
pub const PLACEHOLDER_INSTALLER: &str = "Installer";
pub const PLACEHOLDER_PARTNER: &str = "Partner";
pub const DEFAULT_VEHICLE_STATUS: &str = "ACTIVE";
pub const DEFAULT_COUNTRY_LABEL: &str = "USA";

// =============================================================================
// Datasets
// =============================================================================

/// Dataset names served from the dashboard data directory
pub const DATASET_NAMES: &[&str] = &[
    "installers",
    "vehicles",
    "towing_companies",
    "resellers",
    "repair_shops",
    "locksmiths",
    "dispatchers",
    "technicians",
    "inspectors",
];

/// Extension of dataset files
pub const DATASET_FILE_EXTENSION: &str = "csv";

/// Default relative data directory of the web shell
pub const DEFAULT_DATA_DIR: &str = "assets/data";

// =============================================================================
// Access Control
// =============================================================================

pub mod roles {
    pub const USER: &str = "user";
    pub const MODERATOR: &str = "moderator";
    pub const ADMINISTRATOR: &str = "administrator";

    pub const STATUS_ACTIVE: &str = "active";
    pub const STATUS_SUSPENDED: &str = "suspended";
}

// =============================================================================
// Background Modes
// =============================================================================

pub mod weather {
    /// Key under which the shell persists the background preference
    pub const BACKGROUND_STORAGE_KEY: &str = "techloc-background-mode";

    /// WMO weather codes reported as snowfall
    pub const SNOW_CODES: &[i32] = &[71, 73, 75, 77, 85, 86];

    /// WMO weather codes reported as drizzle or rain
    pub const RAIN_CODES: &[i32] = &[51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82];

    /// Interval between weather re-checks in auto mode
    pub const WEATHER_REFRESH_SECS: u64 = 10 * 60;

    pub const SNOW_REASON: &str = "Snow detected in your area";
    pub const RAIN_REASON: &str = "Rain detected in your area";
    pub const CLEAR_REASON: &str = "No precipitation right now";

    pub const SNOW_MODE_STATUS: &str = "Snow mode active";
    pub const RAIN_MODE_STATUS: &str = "Rain mode active";
    pub const CONSTELLATION_MODE_STATUS: &str = "Constellations mode active";
}
