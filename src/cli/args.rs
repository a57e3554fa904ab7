//! Command-line argument definitions for Techloc
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::{Coordinates, DatasetKind};
use crate::constants::DATASET_NAMES;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the Techloc data tools
///
/// Normalizes fleet and service-partner datasets and places records without
/// coordinates at an approximate map position.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "techloc",
    version,
    about = "Normalize fleet and service-partner datasets with approximate map placement",
    long_about = "Loads vehicle, installer and service-partner CSV exports, maps their inconsistent \
                  headers onto one record shape and assigns every record a map position. Records \
                  without coordinates are placed deterministically around their postal code, city \
                  or region center and tagged with how specific that placement is."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load datasets, normalize every row and report or export the records
    Normalize(NormalizeArgs),
    /// Resolve a single ad-hoc location
    Resolve(ResolveArgs),
    /// List the dataset catalog and which files are present
    Datasets(DatasetsArgs),
}

/// Data directory and placement table options shared by all commands
#[derive(Debug, Clone, Default, Parser)]
pub struct SourceArgs {
    /// Directory holding `<dataset>.csv` files
    ///
    /// Defaults to ./assets/data
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding <dataset>.csv files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Region center JSON resource
    ///
    /// Defaults to state-centers.json inside the data directory. A missing or
    /// malformed file falls back to the built-in national center.
    #[arg(
        long = "state-centers",
        value_name = "FILE",
        help = "Region center JSON resource"
    )]
    pub state_centers: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the normalize command
#[derive(Debug, Clone, Parser)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Datasets to load (comma-separated list)
    ///
    /// If not specified, loads every catalog dataset found in the data directory.
    #[arg(
        short = 's',
        long = "datasets",
        value_name = "LIST",
        help = "Comma-separated list of datasets to load",
        long_help = "Datasets to load as a comma-separated list.\n\
                     Available datasets:\n  \
                     installers, vehicles, towing_companies, resellers, repair_shops,\n  \
                     locksmiths, dispatchers, technicians, inspectors\n\n\
                     If not specified, loads every catalog dataset found in the data directory"
    )]
    pub datasets: Option<DatasetList>,

    /// Region code for installer and partner rows without one
    #[arg(
        long = "default-region",
        value_name = "CODE",
        help = "Region code assumed for rows that carry none"
    )]
    pub default_region: Option<String>,

    /// Keep only vehicles whose model, VIN, location or customer match
    #[arg(
        long = "search",
        value_name = "TEXT",
        help = "Keep only vehicles matching this text"
    )]
    pub search: Option<String>,

    /// Maximum number of datasets loaded at once
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "COUNT",
        help = "Maximum number of datasets loaded concurrently"
    )]
    pub jobs: Option<usize>,

    /// Write records to this file instead of stdout (json and csv formats)
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for exported records"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the resolve command
#[derive(Debug, Clone, Parser)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Region (state) code or name; only the first two letters are used
    #[arg(
        short = 'r',
        long = "region",
        value_name = "CODE",
        default_value = "",
        help = "Region code or name"
    )]
    pub region: String,

    /// Postal code
    #[arg(short = 'z', long = "zip", value_name = "ZIP", default_value = "")]
    pub zip: String,

    /// City name
    #[arg(short = 'c', long = "city", value_name = "CITY", default_value = "")]
    pub city: String,

    /// Seed separating identically named cities
    #[arg(long = "seed", value_name = "N", default_value_t = 0)]
    pub seed: u64,

    /// Known coordinates as LAT,LNG
    #[arg(
        long = "coords",
        value_name = "LAT,LNG",
        help = "Known coordinates; used as-is when finite"
    )]
    pub coords: Option<CoordinateArg>,

    /// Report the distance to this point as LAT,LNG
    #[arg(
        long = "from",
        value_name = "LAT,LNG",
        help = "Report distance and hotspot membership relative to this point"
    )]
    pub from: Option<CoordinateArg>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the datasets command
#[derive(Debug, Clone, Parser)]
pub struct DatasetsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated dataset lists
#[derive(Debug, Clone)]
pub struct DatasetList {
    pub datasets: Vec<DatasetKind>,
}

impl FromStr for DatasetList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if names.is_empty() {
            return Err(Error::configuration("Dataset list cannot be empty"));
        }

        let mut datasets = Vec::with_capacity(names.len());
        for name in names {
            let kind = name.parse::<DatasetKind>().map_err(|_| {
                Error::configuration(format!(
                    "Unknown dataset '{}'. Available datasets: {}",
                    name,
                    DATASET_NAMES.join(", ")
                ))
            })?;
            if !datasets.contains(&kind) {
                datasets.push(kind);
            }
        }

        Ok(DatasetList { datasets })
    }
}

/// A `LAT,LNG` pair given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateArg(pub Coordinates);

impl FromStr for CoordinateArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s.split_once(',').ok_or_else(|| {
            Error::configuration("Coordinates must be in format: LAT,LNG")
        })?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid longitude: {}", lng)))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::configuration(format!(
                "Latitude out of range: {}",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(Error::configuration(format!(
                "Longitude out of range: {}",
                lng
            )));
        }

        Ok(CoordinateArg(Coordinates::new(lat, lng)))
    }
}

impl SourceArgs {
    /// Validate that explicitly given paths exist
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl NormalizeArgs {
    /// Validate the normalize command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;

        if self.jobs == Some(0) {
            return Err(Error::configuration(
                "Number of jobs must be greater than 0",
            ));
        }

        if let Some(output_file) = &self.output_file {
            if self.output_format == OutputFormat::Human {
                return Err(Error::configuration(
                    "--output-file requires --output-format json or csv",
                ));
            }
            if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Explicitly requested datasets, if any
    pub fn get_datasets(&self) -> Option<Vec<DatasetKind>> {
        self.datasets.as_ref().map(|list| list.datasets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::PartnerType;
    use tempfile::TempDir;

    fn normalize_args() -> NormalizeArgs {
        NormalizeArgs {
            source: SourceArgs::default(),
            datasets: None,
            default_region: None,
            search: None,
            jobs: None,
            output_file: None,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_dataset_list_parsing() {
        let result = DatasetList::from_str("vehicles").unwrap();
        assert_eq!(result.datasets, vec![DatasetKind::Vehicles]);

        let result = DatasetList::from_str(" installers , towing-companies,installers ").unwrap();
        assert_eq!(
            result.datasets,
            vec![
                DatasetKind::Installers,
                DatasetKind::Partners(PartnerType::TowingCompanies)
            ]
        );

        assert!(DatasetList::from_str("trucks").is_err());
        assert!(DatasetList::from_str("").is_err());
        assert!(DatasetList::from_str(",,,").is_err());
    }

    #[test]
    fn test_coordinate_arg_parsing() {
        let arg = CoordinateArg::from_str("34.05, -118.25").unwrap();
        assert_eq!(arg.0, Coordinates::new(34.05, -118.25));

        assert!(CoordinateArg::from_str("34.05").is_err());
        assert!(CoordinateArg::from_str("north,west").is_err());
        assert!(CoordinateArg::from_str("91,0").is_err());
        assert!(CoordinateArg::from_str("0,181").is_err());
    }

    #[test]
    fn test_normalize_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let mut args = normalize_args();
        args.source.data_dir = Some(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        let mut invalid = args.clone();
        invalid.jobs = Some(0);
        assert!(invalid.validate().is_err());

        let mut invalid = args.clone();
        invalid.output_file = Some(temp_dir.path().join("out.json"));
        assert!(invalid.validate().is_err());
        invalid.output_format = OutputFormat::Json;
        assert!(invalid.validate().is_ok());

        let mut invalid = args.clone();
        invalid.source.data_dir = Some(PathBuf::from("/nonexistent/techloc"));
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut source = SourceArgs::default();
        assert_eq!(source.get_log_level(), "warn");

        source.verbose = 1;
        assert_eq!(source.get_log_level(), "info");

        source.verbose = 2;
        assert_eq!(source.get_log_level(), "debug");

        source.verbose = 5;
        assert_eq!(source.get_log_level(), "trace");

        source.quiet = true;
        assert_eq!(source.get_log_level(), "error");
        assert!(!source.show_progress());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = Args::try_parse_from([
            "techloc",
            "resolve",
            "--region",
            "texas",
            "--city",
            "Austin",
            "--seed",
            "3",
            "--output-format",
            "json",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Resolve(resolve)) => {
                assert_eq!(resolve.region, "texas");
                assert_eq!(resolve.city, "Austin");
                assert_eq!(resolve.seed, 3);
                assert_eq!(resolve.output_format, OutputFormat::Json);
            }
            other => panic!("expected resolve command, got {:?}", other),
        }

        let args = Args::try_parse_from(["techloc", "normalize", "-s", "vehicles", "-vv"]).unwrap();
        match args.command {
            Some(Commands::Normalize(normalize)) => {
                assert_eq!(normalize.get_datasets(), Some(vec![DatasetKind::Vehicles]));
                assert_eq!(normalize.source.verbose, 2);
            }
            other => panic!("expected normalize command, got {:?}", other),
        }
    }
}
