//! Configuration management and validation.
//!
//! Provides the configuration structure for dataset loading and coordinate
//! resolution, with builder-style overrides applied from the CLI.

use crate::constants::{DATASET_NAMES, DEFAULT_DATA_DIR, FALLBACK_REGION_CODE, STATE_CENTERS_FILE_NAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for Techloc processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechlocConfig {
    /// Directory holding `<dataset>.csv` files
    pub data_dir: PathBuf,

    /// State center JSON resource; defaults to `<data_dir>/state-centers.json`
    pub state_centers_path: Option<PathBuf>,

    /// Region code assumed for rows that carry none
    pub default_region: String,

    /// Show progress bars while loading
    pub show_progress: bool,

    /// Maximum number of datasets loaded concurrently
    pub max_concurrent_datasets: usize,
}

impl Default for TechlocConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            state_centers_path: None,
            default_region: FALLBACK_REGION_CODE.to_string(),
            show_progress: true,
            max_concurrent_datasets: default_concurrency(),
        }
    }
}

/// One dataset per physical core, capped at the catalog size
fn default_concurrency() -> usize {
    num_cpus::get_physical().clamp(1, DATASET_NAMES.len())
}

impl TechlocConfig {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Create configuration with an explicit state center resource
    pub fn with_state_centers_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_centers_path = Some(path.into());
        self
    }

    /// Set the region code used when rows carry none
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Disable progress bars
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Set maximum concurrent dataset loads
    pub fn with_max_concurrent_datasets(mut self, max: usize) -> Self {
        self.max_concurrent_datasets = max;
        self
    }

    /// Resolved location of the state center resource
    pub fn state_centers_path(&self) -> PathBuf {
        self.state_centers_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(STATE_CENTERS_FILE_NAME))
    }

    /// Default data directory under the user's data dir, if one exists
    pub fn user_data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("techloc"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let region = self.default_region.trim();
        if region.chars().count() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::configuration(format!(
                "Default region must be a 2-letter code, got '{}'",
                self.default_region
            )));
        }

        if self.max_concurrent_datasets == 0 {
            return Err(Error::configuration(
                "max_concurrent_datasets must be at least 1",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
