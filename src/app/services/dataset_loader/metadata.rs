//! Dataset loading statistics

use crate::app::models::LocationAccuracy;
use std::collections::BTreeMap;
use std::time::Duration;

/// Statistics about loading and normalizing one dataset
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Dataset name (`vehicles`, `towing_companies`, ...)
    pub dataset: String,

    /// Data rows read from the file
    pub rows_read: usize,

    /// Rows the CSV reader could not decode
    pub rows_skipped: usize,

    /// Records produced by normalization
    pub records_normalized: usize,

    /// Records per location accuracy tier
    pub by_accuracy: BTreeMap<LocationAccuracy, usize>,

    /// Time taken to read and normalize
    pub load_duration: Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            rows_read: 0,
            rows_skipped: 0,
            records_normalized: 0,
            by_accuracy: BTreeMap::new(),
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Count a normalized record in its accuracy tier
    pub fn record(&mut self, accuracy: LocationAccuracy) {
        self.records_normalized += 1;
        *self.by_accuracy.entry(accuracy).or_insert(0) += 1;
    }

    /// Records placed at the given tier
    pub fn count_for(&self, accuracy: LocationAccuracy) -> usize {
        self.by_accuracy.get(&accuracy).copied().unwrap_or(0)
    }

    /// Records whose position is a display approximation
    pub fn approximate_count(&self) -> usize {
        self.records_normalized - self.count_for(LocationAccuracy::Exact)
    }

    /// Share of records with exact coordinates, as a percentage
    pub fn exact_rate(&self) -> f64 {
        if self.records_normalized == 0 {
            0.0
        } else {
            (self.count_for(LocationAccuracy::Exact) as f64 / self.records_normalized as f64)
                * 100.0
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} '{}' records from {} rows ({:.1}% exact, {} approximate, {} skipped) in {:.2}s",
            self.records_normalized,
            self.dataset,
            self.rows_read,
            self.exact_rate(),
            self.approximate_count(),
            self.rows_skipped,
            self.load_duration.as_secs_f64()
        )
    }
}
