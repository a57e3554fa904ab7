//! Dataset loading for the dashboard data directory
//!
//! Each dataset in the catalog lives at `<data_dir>/<name>.csv`. Loading reads
//! the file on a blocking task, normalizes every row through the shared
//! coordinate resolver and reports per-dataset statistics.
//!
//! ## Architecture
//!
//! - [`reader`] - CSV files to raw JSON rows
//! - [`metadata`] - load statistics
//! - [`DatasetLoader`] - discovery, single and concurrent dataset loads

use crate::app::models::{DatasetKind, NormalizedRecord};
use crate::app::services::coordinate_resolver::CoordinateResolver;
use crate::app::services::record_normalizer::{DefaultHelpers, normalize_record};
use crate::app::services::state_centers::StateCenterTable;
use crate::config::TechlocConfig;
use crate::constants::DATASET_FILE_EXTENSION;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub mod metadata;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use metadata::LoadStats;
pub use reader::{RawRows, read_csv_rows, read_rows_from};

/// A dataset with its normalized records
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub kind: DatasetKind,
    pub records: Vec<NormalizedRecord>,
    pub stats: LoadStats,
}

/// Catalog entry as found on disk
#[derive(Debug, Clone, Serialize)]
pub struct DatasetFile {
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
    pub size_bytes: u64,
}

/// Loads catalog datasets from a data directory
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    config: TechlocConfig,
    resolver: Arc<CoordinateResolver>,
}

impl DatasetLoader {
    pub fn new(config: TechlocConfig, resolver: Arc<CoordinateResolver>) -> Self {
        Self { config, resolver }
    }

    /// Build a loader whose resolver uses the configured state center table
    ///
    /// A missing or malformed table degrades to the default center; it never
    /// prevents loading.
    pub async fn from_config(config: TechlocConfig) -> Self {
        let centers = StateCenterTable::load(&config.state_centers_path()).await;
        info!(
            "Using {} region centers for placement",
            centers.region_count()
        );
        Self::new(config, Arc::new(CoordinateResolver::new(centers)))
    }

    pub fn config(&self) -> &TechlocConfig {
        &self.config
    }

    pub fn resolver(&self) -> &CoordinateResolver {
        &self.resolver
    }

    /// Expected location of a dataset file
    pub fn dataset_path(&self, kind: DatasetKind) -> PathBuf {
        self.config.data_dir.join(kind.file_name())
    }

    /// Report every catalog dataset and whether its file is present
    pub fn catalog(&self) -> Vec<DatasetFile> {
        DatasetKind::all()
            .into_iter()
            .map(|kind| {
                let path = self.dataset_path(kind);
                let size_bytes = std::fs::metadata(&path).map(|m| m.len()).ok();
                DatasetFile {
                    name: kind.name().to_string(),
                    exists: size_bytes.is_some(),
                    size_bytes: size_bytes.unwrap_or(0),
                    path,
                }
            })
            .collect()
    }

    /// Catalog datasets with a file in the data directory
    ///
    /// Files whose stem is not a catalog name are logged and ignored.
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the data directory doesn't exist
    /// * Returns `Error::DirectoryTraversal` if the directory cannot be read
    pub fn discover(&self) -> Result<Vec<DatasetKind>> {
        discover_datasets(&self.config.data_dir)
    }

    /// Load and normalize one dataset
    ///
    /// # Arguments
    /// * `kind` - Catalog dataset to load from `<data_dir>/<name>.csv`
    ///
    /// # Returns
    /// * `Result<LoadedDataset>` - Normalized records and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the dataset file doesn't exist
    /// * Returns `Error::CsvParsing` if the header line is malformed
    /// * Returns `Error::ProcessingInterrupted` if the reader task is cancelled
    pub async fn load(&self, kind: DatasetKind) -> Result<LoadedDataset> {
        let path = self.dataset_path(kind);
        info!("Loading dataset '{}' from {}", kind, path.display());

        let start_time = Instant::now();
        let raw = task::spawn_blocking({
            let path = path.clone();
            move || read_csv_rows(&path)
        })
        .await
        .map_err(|e| {
            Error::processing_interrupted(format!("Reading {} failed: {}", path.display(), e))
        })??;

        let mut stats = LoadStats::new(kind.name());
        stats.rows_read = raw.rows.len();
        stats.rows_skipped = raw.errors.len();
        stats.errors = raw.errors;

        let records = self.normalize_rows(kind, &raw.rows, &mut stats);
        stats.load_duration = start_time.elapsed();

        info!("{}", stats.summary());
        Ok(LoadedDataset {
            kind,
            records,
            stats,
        })
    }

    /// Normalize already decoded rows, e.g. rows fetched from a backend
    pub fn normalize_rows(
        &self,
        kind: DatasetKind,
        rows: &[serde_json::Value],
        stats: &mut LoadStats,
    ) -> Vec<NormalizedRecord> {
        let helpers =
            DefaultHelpers::new(&self.resolver).with_default_region(&self.config.default_region);

        let progress_bar = self.progress_bar(rows.len() as u64, kind);

        let records = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let record = normalize_record(kind, row, index, &helpers);
                stats.record(record.accuracy());
                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }
                record
            })
            .collect();

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("{} normalized", kind));
        }
        records
    }

    /// Load several datasets concurrently
    ///
    /// Results come back in the order of `kinds`. A failing dataset does not
    /// stop the others.
    pub async fn load_many(&self, kinds: &[DatasetKind]) -> Vec<(DatasetKind, Result<LoadedDataset>)> {
        let concurrent_limit = self.config.max_concurrent_datasets.max(1);
        debug!(
            "Loading {} datasets with concurrency {}",
            kinds.len(),
            concurrent_limit
        );

        let mut results: Vec<(usize, DatasetKind, Result<LoadedDataset>)> =
            stream::iter(kinds.iter().copied().enumerate())
                .map(|(position, kind)| async move {
                    let result = self.load(kind).await;
                    if let Err(e) = &result {
                        warn!("Failed to load dataset '{}': {}", kind, e);
                    }
                    (position, kind, result)
                })
                .buffer_unordered(concurrent_limit)
                .collect()
                .await;

        results.sort_by_key(|(position, _, _)| *position);
        results
            .into_iter()
            .map(|(_, kind, result)| (kind, result))
            .collect()
    }

    fn progress_bar(&self, len: u64, kind: DatasetKind) -> Option<ProgressBar> {
        if !self.config.show_progress || len == 0 {
            return None;
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(format!("Normalizing {}...", kind));
        Some(pb)
    }
}

/// Catalog datasets present directly under `data_dir`, in catalog order
///
/// # Errors
/// * Returns `Error::FileNotFound` if `data_dir` doesn't exist
/// * Returns `Error::DirectoryTraversal` if the directory cannot be read
pub fn discover_datasets(data_dir: &Path) -> Result<Vec<DatasetKind>> {
    if !data_dir.exists() {
        return Err(Error::file_not_found(data_dir.display().to_string()));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to read {}", data_dir.display()), e)
        })?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(DATASET_FILE_EXTENSION)
        {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        match stem.parse::<DatasetKind>() {
            Ok(kind) => found.push(kind),
            Err(_) => debug!("Ignoring non-catalog file {}", path.display()),
        }
    }

    let catalog = DatasetKind::all();
    found.sort_by_key(|kind| catalog.iter().position(|k| k == kind));
    found.dedup();
    info!(
        "Discovered {} datasets in {}",
        found.len(),
        data_dir.display()
    );
    Ok(found)
}
