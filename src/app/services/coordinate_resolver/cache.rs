//! Insert-only cache of derived placements

use crate::app::models::Coordinates;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Derived coordinates keyed by normalized postal code or city plus region
///
/// Entries are never evicted; the key space is bounded by the loaded
/// datasets. The map sits behind a mutex so one resolver can serve several
/// threads.
#[derive(Debug, Default)]
pub struct CoordinateCache {
    entries: Mutex<HashMap<String, Coordinates>>,
}

impl CoordinateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for a postal-code placement: `"{zip}-{region}"`, lowercased
    pub fn zip_key(zip: &str, region_code: &str) -> String {
        format!("{}-{}", zip, region_code).to_lowercase()
    }

    /// Key for a city placement: `"{city}-{region}#{seed}"`, lowercased
    ///
    /// The seed is part of the key so identically named cities from different
    /// datasets keep distinct positions.
    pub fn city_key(city: &str, region_code: &str, seed: u64) -> String {
        format!("{}-{}#{}", city, region_code, seed).to_lowercase()
    }

    /// Cached value for `key`, computing and storing it on a miss
    pub fn get_or_insert_with<F>(&self, key: String, compute: F) -> Coordinates
    where
        F: FnOnce() -> Coordinates,
    {
        let mut entries = self.lock();
        *entries.entry(key).or_insert_with(compute)
    }

    /// Cached value for `key`, computing it on a miss; `None` results are not stored
    pub fn get_or_try_insert_with<F>(&self, key: String, compute: F) -> Option<Coordinates>
    where
        F: FnOnce() -> Option<Coordinates>,
    {
        let mut entries = self.lock();
        if let Some(found) = entries.get(&key) {
            return Some(*found);
        }
        let computed = compute()?;
        entries.insert(key, computed);
        Some(computed)
    }

    pub fn get(&self, key: &str) -> Option<Coordinates> {
        self.lock().get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are plain values, so a panic mid-insert cannot leave them torn
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Coordinates>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
