//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::SourceArgs;
use crate::config::TechlocConfig;
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Run statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of datasets loaded
    pub datasets_processed: usize,
    /// Number of records normalized or resolved
    pub records_processed: usize,
    /// Number of records placed approximately
    pub approximate_records: usize,
    /// Number of errors encountered
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunSummary {
    /// Share of records whose position is approximate, as a percentage
    pub fn approximate_rate(&self) -> f64 {
        if self.records_processed == 0 {
            0.0
        } else {
            (self.approximate_records as f64 / self.records_processed as f64) * 100.0
        }
    }
}

/// Set up structured logging for any command
pub fn setup_logging(source: &SourceArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = source.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("techloc={}", log_level)));

    if source.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the configuration from defaults and CLI overrides
///
/// Without `--data-dir`, `./assets/data` is used when it exists, then the
/// per-user data directory.
pub fn build_config(source: &SourceArgs) -> Result<TechlocConfig> {
    let mut config = TechlocConfig::default();

    match &source.data_dir {
        Some(data_dir) => config = config.with_data_dir(data_dir),
        None if !config.data_dir.is_dir() => {
            if let Some(user_dir) = TechlocConfig::user_data_dir().filter(|dir| dir.is_dir()) {
                debug!("Using user data directory {}", user_dir.display());
                config = config.with_data_dir(user_dir);
            }
        }
        None => {}
    }

    if let Some(path) = &source.state_centers {
        config = config.with_state_centers_path(path);
    }

    if !source.show_progress() {
        config = config.without_progress();
    }

    Ok(config)
}

/// Write `content` to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, content: &str, what: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                Error::io(format!("Failed to write {} to {}", what, path.display()), e)
            })?;
            tracing::info!("{} written to: {}", what, path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
