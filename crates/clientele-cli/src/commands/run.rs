//! Run command
//!
//! Full pipeline in one invocation: schema setup, CSV load, commit, then
//! all five reports to stdout. The store connection is opened once and
//! dropped when the command returns.

use clap::Args;
use std::path::PathBuf;

use super::report::ReportParams;
use super::ProfileArg;
use clientele_store::ingest::load_csv_files;
use clientele_store::{db, migrations, SchemaProfile};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the SQLite store
    #[arg(long, default_value = "boutique.db")]
    pub db: PathBuf,

    /// Path to the clients export
    #[arg(long, default_value = "jeu-de-donnees-clients.csv")]
    pub clients: PathBuf,

    /// Path to the orders export
    #[arg(long, default_value = "jeu-de-donnees-commandes.csv")]
    pub orders: PathBuf,

    /// Schema profile for the store
    #[arg(long, value_enum, default_value_t = ProfileArg::Managed)]
    pub profile: ProfileArg,

    #[command(flatten)]
    pub params: ReportParams,
}

/// Execute the full load-then-report pipeline
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = SchemaProfile::from(args.profile);

    let mut conn = db::open(&args.db)?;
    db::configure(&conn, profile)?;
    migrations::apply_migrations(&mut conn, profile)?;

    let report = load_csv_files(&mut conn, profile, &args.clients, &args.orders)?;
    println!(
        "Loaded {} clients and {} orders\n",
        report.clients_inserted, report.orders_inserted
    );

    super::report::print_reports(&conn, &args.params)
}
