//! Best-effort coordinate resolution for dataset rows
//!
//! Resolution walks a fixed priority list and stops at the first tier the
//! input supports:
//!
//! 1. explicit latitude/longitude on the row (finite, non-zero) → `exact`
//! 2. caller-supplied fallback pair (finite) → `exact`
//! 3. postal code with digits → ring placement around the region center → `zip`
//! 4. city name → seeded ring placement around the region center → `city`
//! 5. region center → `state`
//!
//! Tiers 3 and 4 are display approximations and are cached per key. Nothing
//! here fails: every input, however malformed, yields a location.

use crate::app::models::{Coordinates, LocationAccuracy, ResolvedLocation};
use crate::app::services::field_extractor::{FieldExtractor, LogicalField};
use crate::app::services::state_centers::StateCenterTable;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

pub mod cache;
pub mod distance;
pub mod placement;

#[cfg(test)]
pub mod tests;

pub use cache::CoordinateCache;
use placement::{city_placement, effective_city_seed, parse_leading_f64, zip_placement};

/// Inputs for a single resolution besides the row itself
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRequest<'a> {
    pub zip: &'a str,
    pub city: &'a str,
    /// Canonical region code used for the center lookup
    pub region_code: &'a str,
    /// Decorrelates identically named cities across datasets
    pub seed: u64,
    /// Coordinates known by the caller, used when the row has none
    pub fallback: Option<Coordinates>,
}

impl<'a> ResolveRequest<'a> {
    pub fn new(region_code: &'a str) -> Self {
        Self {
            region_code,
            ..Default::default()
        }
    }

    pub fn with_zip(mut self, zip: &'a str) -> Self {
        self.zip = zip;
        self
    }

    pub fn with_city(mut self, city: &'a str) -> Self {
        self.city = city;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fallback(mut self, fallback: Option<Coordinates>) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Resolves rows to coordinates with an owned placement cache
#[derive(Debug)]
pub struct CoordinateResolver {
    centers: Arc<StateCenterTable>,
    cache: CoordinateCache,
    extractor: FieldExtractor,
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new(StateCenterTable::new())
    }
}

impl CoordinateResolver {
    pub fn new(centers: StateCenterTable) -> Self {
        Self::with_shared_centers(Arc::new(centers))
    }

    pub fn with_shared_centers(centers: Arc<StateCenterTable>) -> Self {
        Self {
            centers,
            cache: CoordinateCache::new(),
            extractor: FieldExtractor::new(),
        }
    }

    pub fn centers(&self) -> &StateCenterTable {
        &self.centers
    }

    /// Swap in a freshly loaded table
    ///
    /// Cached placements were derived from the old centers, so the cache is
    /// cleared as well.
    pub fn replace_centers(&mut self, centers: StateCenterTable) {
        debug!(
            "Replacing state center table ({} -> {} regions), clearing {} cached placements",
            self.centers.region_count(),
            centers.region_count(),
            self.cache.len()
        );
        self.centers = Arc::new(centers);
        self.cache.clear();
    }

    pub fn cache(&self) -> &CoordinateCache {
        &self.cache
    }

    /// Forget every cached placement
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolve a row to a location
    pub fn resolve(&self, row: &Value, request: &ResolveRequest<'_>) -> ResolvedLocation {
        if let Some(coordinates) = self.explicit_coordinates(row) {
            return ResolvedLocation::exact(coordinates);
        }

        if let Some(fallback) = request.fallback.filter(Coordinates::is_finite) {
            return ResolvedLocation::exact(fallback);
        }

        self.resolve_approximate(request)
    }

    /// Resolve from the request alone, ignoring any row coordinates
    pub fn resolve_approximate(&self, request: &ResolveRequest<'_>) -> ResolvedLocation {
        let center = self.centers.center_for(request.region_code);

        let zip = request.zip.trim();
        if !zip.is_empty() {
            let key = CoordinateCache::zip_key(zip, request.region_code);
            if let Some(coordinates) = self
                .cache
                .get_or_try_insert_with(key, || zip_placement(center, zip))
            {
                trace!("Placed zip '{}' in {} at {}", zip, request.region_code, coordinates);
                return ResolvedLocation::approximate(coordinates, LocationAccuracy::Zip);
            }
            trace!("Postal code '{}' has no digits, trying city", zip);
        }

        let city = request.city.trim().to_lowercase();
        if !city.is_empty() {
            let seed = effective_city_seed(request.seed);
            let key = CoordinateCache::city_key(&city, request.region_code, seed);
            let coordinates = self
                .cache
                .get_or_insert_with(key, || city_placement(center, &city, seed));
            trace!("Placed city '{}' in {} at {}", city, request.region_code, coordinates);
            return ResolvedLocation::approximate(coordinates, LocationAccuracy::City);
        }

        ResolvedLocation::approximate(center, LocationAccuracy::State)
    }

    /// Finite, non-zero latitude and longitude carried by the row itself
    pub fn explicit_coordinates(&self, row: &Value) -> Option<Coordinates> {
        let lat = parse_leading_f64(&self.extractor.field(row, LogicalField::Latitude))?;
        let lng = parse_leading_f64(&self.extractor.field(row, LogicalField::Longitude))?;
        let coordinates = Coordinates::new(lat, lng);
        coordinates.is_usable_fix().then_some(coordinates)
    }
}
