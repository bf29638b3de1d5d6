//! Clientele CLI
//!
//! Command-line interface for the client/order ETL pipeline

use clap::{Parser, Subcommand};
use clientele_core::logging_facility;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "clientele")]
#[command(about = "Clientele - client/order ETL and marketing reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the CSV exports, then print all reports
    Run(commands::run::RunArgs),
    /// Schema setup and CSV load only
    Load(commands::load::LoadArgs),
    /// Print reports against an already-loaded store
    Report(commands::report::ReportArgs),
}

fn main() {
    logging_facility::init(logging_facility::Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Load(args) => commands::load::execute(args),
        Commands::Report(args) => commands::report::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
