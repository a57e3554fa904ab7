//! Region center table for approximate placement
//!
//! Maps a 2-letter region code to a representative coordinate. Every table
//! carries a `DEFAULT` entry, so a lookup always yields a coordinate even when
//! the resource failed to load.

use crate::app::models::Coordinates;
use crate::constants::{DEFAULT_REGION_KEY, DEFAULT_STATE_CENTER};
use std::collections::HashMap;
use std::path::PathBuf;

pub mod loader;
pub mod metadata;

#[cfg(test)]
pub mod tests;

pub use metadata::CenterLoadStats;

/// Immutable region code → center mapping
#[derive(Debug, Clone)]
pub struct StateCenterTable {
    /// Centers keyed by region code, including `DEFAULT`
    pub(crate) centers: HashMap<String, Coordinates>,

    /// Resource the table was read from, if any
    pub(crate) source: Option<PathBuf>,
}

impl Default for StateCenterTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCenterTable {
    /// Create a table holding only the hardcoded `DEFAULT` center
    pub fn new() -> Self {
        let mut table = Self {
            centers: HashMap::new(),
            source: None,
        };
        table.ensure_default();
        table
    }

    /// Build a table from explicit entries, patching in `DEFAULT` if absent
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Coordinates)>,
        K: Into<String>,
    {
        let mut table = Self {
            centers: entries
                .into_iter()
                .map(|(code, center)| (code.into(), center))
                .collect(),
            source: None,
        };
        table.ensure_default();
        table
    }

    pub(crate) fn ensure_default(&mut self) {
        let usable = self
            .centers
            .get(DEFAULT_REGION_KEY)
            .is_some_and(|center| center.is_finite());
        if !usable {
            self.centers.insert(
                DEFAULT_REGION_KEY.to_string(),
                Coordinates::from(DEFAULT_STATE_CENTER),
            );
        }
    }

    /// Center for a region code
    ///
    /// Exact key match first, then the table's `DEFAULT`, then the continental
    /// US centroid.
    pub fn center_for(&self, region_code: &str) -> Coordinates {
        self.centers
            .get(region_code)
            .or_else(|| self.centers.get(DEFAULT_REGION_KEY))
            .copied()
            .unwrap_or_else(|| Coordinates::from(DEFAULT_STATE_CENTER))
    }

    /// The table's `DEFAULT` center
    pub fn default_center(&self) -> Coordinates {
        self.center_for(DEFAULT_REGION_KEY)
    }

    /// Whether a specific region (not the fallback) is known
    pub fn contains_region(&self, region_code: &str) -> bool {
        region_code != DEFAULT_REGION_KEY && self.centers.contains_key(region_code)
    }

    /// Number of regions, excluding `DEFAULT`
    pub fn region_count(&self) -> usize {
        self.centers
            .keys()
            .filter(|code| code.as_str() != DEFAULT_REGION_KEY)
            .count()
    }

    /// Iterate over region entries (excluding `DEFAULT`), sorted by code
    pub fn regions(&self) -> Vec<(&str, Coordinates)> {
        let mut regions: Vec<_> = self
            .centers
            .iter()
            .filter(|(code, _)| code.as_str() != DEFAULT_REGION_KEY)
            .map(|(code, center)| (code.as_str(), *center))
            .collect();
        regions.sort_by(|a, b| a.0.cmp(b.0));
        regions
    }

    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }
}
