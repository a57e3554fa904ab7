//! Command implementations for the Techloc CLI
//!
//! Each command is implemented in its own module:
//! - `normalize`: load datasets and normalize every row
//! - `resolve`: place a single ad-hoc location
//! - `datasets`: list the dataset catalog

pub mod datasets;
pub mod normalize;
pub mod resolve;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<RunSummary> {
    match args.command {
        Some(Commands::Normalize(normalize_args)) => normalize::run_normalize(normalize_args).await,
        Some(Commands::Resolve(resolve_args)) => resolve::run_resolve(resolve_args).await,
        Some(Commands::Datasets(datasets_args)) => datasets::run_datasets(datasets_args).await,
        None => Err(Error::configuration("No command given")),
    }
}
