use clap::Parser;
use std::process;
use techloc::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(techloc::Error::processing_interrupted("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Techloc - Fleet and Service Partner Data Tools");
    println!("==============================================");
    println!();
    println!("Normalize vehicle, installer and service-partner datasets and place");
    println!("records without coordinates at an approximate map position.");
    println!();
    println!("USAGE:");
    println!("    techloc <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    normalize   Load datasets and normalize every row");
    println!("    resolve     Resolve a single ad-hoc location");
    println!("    datasets    List the dataset catalog and which files exist");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize every dataset in ./assets/data:");
    println!("    techloc normalize");
    println!();
    println!("    # Export vehicles and towing companies as JSON:");
    println!("    techloc normalize --datasets vehicles,towing_companies \\");
    println!("                      --output-format json --output-file records.json");
    println!();
    println!("    # Place a city and measure it against a hotspot center:");
    println!("    techloc resolve --region TX --city Austin --from=30.27,-97.74");
    println!();
    println!("For detailed help on any command, use:");
    println!("    techloc <COMMAND> --help");
}
