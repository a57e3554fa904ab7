//! Resolve command implementation
//!
//! Places one ad-hoc location the same way dataset rows are placed, and
//! optionally reports its distance from a reference point.

use super::shared::{RunSummary, build_config, setup_logging};
use crate::app::models::{Coordinates, ResolvedLocation};
use crate::app::services::coordinate_resolver::distance::{distance_miles, within_hotspot};
use crate::app::services::coordinate_resolver::{CoordinateResolver, ResolveRequest};
use crate::app::services::record_normalizer::canonical_region;
use crate::app::services::state_centers::StateCenterTable;
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::constants::HOTSPOT_RADIUS_MILES;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a single resolution
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReport {
    pub region_code: String,
    #[serde(flatten)]
    pub location: ResolvedLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_hotspot: Option<bool>,
}

/// Resolve command runner
pub async fn run_resolve(args: ResolveArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    debug!("Resolve arguments: {:?}", args);
    args.source.validate()?;

    let config = build_config(&args.source)?;
    config.validate()?;

    let centers = StateCenterTable::load(&config.state_centers_path()).await;
    let resolver = CoordinateResolver::new(centers);

    let region_code =
        canonical_region(&args.region).unwrap_or_else(|| config.default_region.clone());
    let report = resolve_report(&resolver, &args, region_code);
    info!(
        "Resolved {} at {} ({})",
        report.region_code, report.location.coordinates, report.location.accuracy
    );

    match args.output_format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::json("Failed to serialize resolution", e))?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(["region", "lat", "lng", "accuracy", "distance_miles"])?;
            writer.write_record([
                report.region_code.clone(),
                report.location.coordinates.lat.to_string(),
                report.location.coordinates.lng.to_string(),
                report.location.accuracy.to_string(),
                report
                    .distance_miles
                    .map(|miles| format!("{:.1}", miles))
                    .unwrap_or_default(),
            ])?;
            writer.flush()?;
        }
    }

    Ok(RunSummary {
        records_processed: 1,
        approximate_records: usize::from(report.location.is_approximate()),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Resolve the requested location against `resolver`
pub fn resolve_report(
    resolver: &CoordinateResolver,
    args: &ResolveArgs,
    region_code: String,
) -> ResolveReport {
    let request = ResolveRequest::new(&region_code)
        .with_zip(&args.zip)
        .with_city(&args.city)
        .with_seed(args.seed)
        .with_fallback(args.coords.map(|arg| arg.0));

    let location = resolver.resolve(&json!({}), &request);

    let reference: Option<Coordinates> = args.from.map(|arg| arg.0);
    ResolveReport {
        distance_miles: reference.map(|from| distance_miles(from, location.coordinates)),
        within_hotspot: reference.map(|from| within_hotspot(from, location.coordinates)),
        region_code,
        location,
    }
}

fn print_human_report(report: &ResolveReport) {
    println!();
    println!("{}", "📍 Techloc Placement".bright_green().bold());
    println!("====================");
    println!("  {} {}", "Region:".bright_cyan(), report.region_code);
    println!(
        "  {} {}",
        "Coordinates:".bright_cyan(),
        report.location.coordinates
    );
    println!(
        "  {} {}{}",
        "Accuracy:".bright_cyan(),
        report.location.accuracy,
        if report.location.is_approximate() {
            " (approximate)".yellow().to_string()
        } else {
            String::new()
        }
    );

    if let (Some(miles), Some(inside)) = (report.distance_miles, report.within_hotspot) {
        println!("  {} {:.1} mi", "Distance:".bright_cyan(), miles);
        println!(
            "  {} {}",
            format!("Within {} mi hotspot:", HOTSPOT_RADIUS_MILES).bright_cyan(),
            if inside { "yes".green() } else { "no".red() }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::LocationAccuracy;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    fn parse_resolve(argv: &[&str]) -> ResolveArgs {
        let mut full = vec!["techloc", "resolve"];
        full.extend_from_slice(argv);
        match Args::try_parse_from(full).unwrap().command {
            Some(Commands::Resolve(args)) => args,
            other => panic!("expected resolve command, got {:?}", other),
        }
    }

    fn resolver() -> CoordinateResolver {
        CoordinateResolver::new(StateCenterTable::from_entries([(
            "CA",
            Coordinates::new(36.116, -119.681),
        )]))
    }

    #[test]
    fn test_report_for_region_only() {
        let args = parse_resolve(&["--region", "california"]);
        let report = resolve_report(&resolver(), &args, "CA".to_string());

        assert_eq!(report.location.accuracy, LocationAccuracy::State);
        assert_eq!(report.location.coordinates, Coordinates::new(36.116, -119.681));
        assert!(report.distance_miles.is_none());
    }

    #[test]
    fn test_known_coordinates_are_exact() {
        let args = parse_resolve(&["--coords", "34.05,-118.25", "--from", "34.05,-118.25"]);
        let report = resolve_report(&resolver(), &args, "CA".to_string());

        assert_eq!(report.location.accuracy, LocationAccuracy::Exact);
        assert_eq!(report.distance_miles, Some(0.0));
        assert_eq!(report.within_hotspot, Some(true));
    }

    #[test]
    fn test_json_shape() {
        let args = parse_resolve(&["--zip", "90012"]);
        let report = resolve_report(&resolver(), &args, "CA".to_string());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["regionCode"], "CA");
        assert_eq!(value["accuracy"], "zip");
        assert_eq!(value["hasExactCoordinates"], false);
        assert!(value.get("distanceMiles").is_none());
    }
}
