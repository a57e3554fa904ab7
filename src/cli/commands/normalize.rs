//! Normalize command implementation
//!
//! Loads the requested datasets, normalizes every row and prints a summary or
//! exports the records as JSON or CSV.

use super::shared::{RunSummary, build_config, setup_logging, write_output};
use crate::app::models::{LocationAccuracy, NormalizedRecord};
use crate::app::services::dataset_loader::{DatasetLoader, LoadedDataset};
use crate::cli::args::{NormalizeArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use serde_json::{Map, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Normalize command runner
pub async fn run_normalize(args: NormalizeArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    info!("Starting dataset normalization");
    debug!("Normalize arguments: {:?}", args);

    args.validate()?;

    let mut config = build_config(&args.source)?;
    if let Some(region) = &args.default_region {
        config = config.with_default_region(region.trim().to_uppercase());
    }
    if let Some(jobs) = args.jobs {
        config = config.with_max_concurrent_datasets(jobs);
    }
    config.validate()?;

    let loader = DatasetLoader::from_config(config).await;

    let kinds = match args.get_datasets() {
        Some(kinds) => kinds,
        None => loader.discover()?,
    };
    if kinds.is_empty() {
        warn!(
            "No datasets found in {}",
            loader.config().data_dir.display()
        );
    }

    let mut summary = RunSummary::default();
    let mut loaded = Vec::with_capacity(kinds.len());

    for (kind, result) in loader.load_many(&kinds).await {
        match result {
            Ok(mut dataset) => {
                if let Some(query) = &args.search {
                    apply_search(&mut dataset, query);
                }
                summary.datasets_processed += 1;
                summary.records_processed += dataset.records.len();
                summary.approximate_records += dataset
                    .records
                    .iter()
                    .filter(|record| record.accuracy() != LocationAccuracy::Exact)
                    .count();
                summary.errors_encountered += dataset.stats.errors.len();
                loaded.push(dataset);
            }
            Err(e) => {
                summary.errors_encountered += 1;
                if args.get_datasets().is_some() {
                    return Err(e);
                }
                warn!("Skipping dataset '{}': {}", kind, e);
            }
        }
    }

    summary.processing_time = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => print_human_summary(&loaded, &summary),
        OutputFormat::Json => {
            let json = records_json(&loaded)?;
            write_output(args.output_file.as_deref(), &json, "JSON records")?;
        }
        OutputFormat::Csv => {
            let csv = records_csv(&loaded)?;
            write_output(args.output_file.as_deref(), &csv, "CSV records")?;
        }
    }

    info!(
        "Normalization completed in {:.2}s",
        summary.processing_time.as_secs_f64()
    );
    Ok(summary)
}

/// Keep only vehicles matching the query; other datasets are untouched
fn apply_search(dataset: &mut LoadedDataset, query: &str) {
    let before = dataset.records.len();
    dataset.records.retain(|record| match record {
        NormalizedRecord::Vehicle(vehicle) => vehicle.matches(query),
        _ => true,
    });
    debug!(
        "Search '{}' kept {} of {} '{}' records",
        query,
        dataset.records.len(),
        before,
        dataset.kind
    );
}

/// Records grouped by dataset name
pub fn records_json(datasets: &[LoadedDataset]) -> Result<String> {
    let mut grouped = Map::new();
    for dataset in datasets {
        let records = serde_json::to_value(&dataset.records)
            .map_err(|e| Error::json("Failed to serialize records", e))?;
        grouped.insert(dataset.kind.name().to_string(), records);
    }
    serde_json::to_string_pretty(&Value::Object(grouped))
        .map_err(|e| Error::json("Failed to serialize records", e))
}

/// One flat row per record across all datasets
pub fn records_csv(datasets: &[LoadedDataset]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "dataset", "id", "label", "city", "state", "lat", "lng", "accuracy",
    ])?;

    for dataset in datasets {
        for record in &dataset.records {
            let coordinates = record.coordinates();
            let lat = coordinates.lat.to_string();
            let lng = coordinates.lng.to_string();
            writer.write_record([
                dataset.kind.name(),
                record.id(),
                record.label(),
                record.city(),
                record.state(),
                lat.as_str(),
                lng.as_str(),
                record.accuracy().as_str(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::csv_parsing("records", format!("Failed to flush CSV: {}", e), None))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::csv_parsing("records", format!("Invalid UTF-8 in CSV: {}", e), None))
}

fn print_human_summary(datasets: &[LoadedDataset], summary: &RunSummary) {
    println!();
    println!("{}", "📍 Techloc Normalization Report".bright_green().bold());
    println!("================================");

    for dataset in datasets {
        let stats = &dataset.stats;
        println!(
            "  {} {}",
            format!("{}:", dataset.kind).bright_cyan(),
            stats.summary()
        );

        let tiers: Vec<String> = LocationAccuracy::ALL
            .iter()
            .map(|tier| format!("{} {}", tier, stats.count_for(*tier)))
            .collect();
        println!("      {}", tiers.join(" · "));

        if stats.has_errors() {
            println!(
                "      {} {} rows could not be read (see log for details)",
                "⚠️ ".yellow(),
                stats.errors.len()
            );
        }
    }

    println!();
    println!(
        "  {} {} records from {} datasets ({:.1}% approximate) in {:.2}s",
        "Total:".bright_cyan(),
        summary.records_processed,
        summary.datasets_processed,
        summary.approximate_rate(),
        summary.processing_time.as_secs_f64()
    );
    if summary.errors_encountered > 0 {
        println!(
            "  {} {}",
            "Errors:".red().bold(),
            summary.errors_encountered
        );
    }
}
