//! Datasets command implementation
//!
//! Lists the dataset catalog with the file each dataset is read from.

use super::shared::{RunSummary, build_config, format_size, setup_logging};
use crate::app::services::coordinate_resolver::CoordinateResolver;
use crate::app::services::dataset_loader::{DatasetFile, DatasetLoader};
use crate::cli::args::{DatasetsArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Datasets command runner
pub async fn run_datasets(args: DatasetsArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    debug!("Datasets arguments: {:?}", args);
    args.source.validate()?;

    let config = build_config(&args.source)?;
    let data_dir = config.data_dir.clone();
    let loader = DatasetLoader::new(config, Arc::new(CoordinateResolver::default()));
    let catalog = loader.catalog();

    match args.output_format {
        OutputFormat::Human => {
            println!();
            println!("{}", "📦 Techloc Datasets".bright_green().bold());
            println!("===================");
            println!("  {} {}", "Data directory:".bright_cyan(), data_dir.display());
            println!();
            for line in catalog_lines(&catalog) {
                println!("  {}", line);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog)
                .map_err(|e| Error::json("Failed to serialize dataset catalog", e))?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["name", "path", "exists", "size_bytes"])?;
            for entry in &catalog {
                writer.write_record([
                    entry.name.clone(),
                    entry.path.display().to_string(),
                    entry.exists.to_string(),
                    entry.size_bytes.to_string(),
                ])?;
            }
            writer.flush()?;
        }
    }

    Ok(RunSummary {
        datasets_processed: catalog.iter().filter(|entry| entry.exists).count(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// One display line per catalog entry
fn catalog_lines(catalog: &[DatasetFile]) -> Vec<String> {
    catalog
        .iter()
        .map(|entry| {
            if entry.exists {
                format!(
                    "{} {:<18} {}",
                    "✓".green(),
                    entry.name,
                    format_size(entry.size_bytes)
                )
            } else {
                format!("{} {:<18} {}", "✗".red(), entry.name, "missing".dimmed())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_catalog_lines() {
        colored::control::set_override(false);
        let catalog = vec![
            DatasetFile {
                name: "vehicles".to_string(),
                path: PathBuf::from("data/vehicles.csv"),
                exists: true,
                size_bytes: 2048,
            },
            DatasetFile {
                name: "locksmiths".to_string(),
                path: PathBuf::from("data/locksmiths.csv"),
                exists: false,
                size_bytes: 0,
            },
        ];

        let lines = catalog_lines(&catalog);
        assert_eq!(lines[0], format!("✓ {:<18} 2.00 KB", "vehicles"));
        assert_eq!(lines[1], format!("✗ {:<18} missing", "locksmiths"));
    }
}
