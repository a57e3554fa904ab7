//! Techloc Library
//!
//! Data layer for the Techloc fleet and service-partner dashboard. Raw dataset
//! rows (vehicles, installers, service partners) arrive with inconsistent
//! headers and often without coordinates; this library turns them into
//! display-ready records with a best-effort map position.
//!
//! This library provides tools for:
//! - Loading the region-center table used as a placement anchor
//! - Looking up logical fields across header spelling variants
//! - Resolving approximate coordinates from lat/lng, postal code, city or region
//! - Normalizing vehicle, installer and partner rows
//! - Loading CSV datasets from the dashboard data directory
//! - Role permissions and background-mode selection shared with the web shell
//!
//! `access_control` and `background` have no CLI command; they are library
//! surface for the web shell's route guards and animated background.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod access_control;
        pub mod background;
        pub mod coordinate_resolver;
        pub mod dataset_loader;
        pub mod field_extractor;
        pub mod record_normalizer;
        pub mod state_centers;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Coordinates, LocationAccuracy, ResolvedLocation};
pub use app::services::coordinate_resolver::CoordinateResolver;
pub use app::services::field_extractor::FieldExtractor;
pub use app::services::state_centers::StateCenterTable;
pub use config::TechlocConfig;

/// Result type alias for Techloc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Techloc operations
///
/// Coordinate resolution and record normalization never produce these; they
/// surface from file loading, configuration and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Region-center table could not be loaded
    #[error("State center table error in '{path}': {message}")]
    StateCenters { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },

    /// Unknown dataset name
    #[error("Unknown dataset: {dataset_name}")]
    UnknownDataset { dataset_name: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a state center table error
    pub fn state_centers(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StateCenters {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Create an unknown dataset error
    pub fn unknown_dataset(dataset_name: impl Into<String>) -> Self {
        Self::UnknownDataset {
            dataset_name: dataset_name.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
