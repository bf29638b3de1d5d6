//! Report command
//!
//! Runs the five fixed reports against a loaded store and prints
//! human-readable listings to stdout.

use clap::Args;
use rusqlite::Connection;
use std::path::PathBuf;

use clientele_store::reports::{
    self, ClientSummary, DEFAULT_LARGE_ORDER_THRESHOLD, DEFAULT_RECENT_ORDER_CUTOFF,
    DEFAULT_TOTAL_CLIENT_ID,
};
use clientele_store::db;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the SQLite store
    #[arg(long, default_value = "boutique.db")]
    pub db: PathBuf,

    #[command(flatten)]
    pub params: ReportParams,
}

/// Report parameters with their documented defaults
#[derive(Debug, Args)]
pub struct ReportParams {
    /// Client whose order history is listed
    #[arg(long, default_value_t = 2)]
    pub client: i64,

    /// Client whose order total is computed
    #[arg(long, default_value_t = DEFAULT_TOTAL_CLIENT_ID)]
    pub total_client: i64,

    /// Large-order threshold (strictly greater than)
    #[arg(long, default_value_t = DEFAULT_LARGE_ORDER_THRESHOLD)]
    pub threshold: f64,

    /// Recent-order cutoff date, YYYY-MM-DD (strictly after)
    #[arg(long, default_value = DEFAULT_RECENT_ORDER_CUTOFF)]
    pub cutoff: String,
}

/// Execute report against an existing store
pub fn execute(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = db::open(&args.db)?;
    print_reports(&conn, &args.params)
}

/// Run all five reports and print their listings
pub fn print_reports(
    conn: &Connection,
    params: &ReportParams,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Clients with marketing consent:");
    print_client_listing(&reports::consenting_clients(conn)?);

    println!("\nOrders for client {}:", params.client);
    for order in reports::orders_for_client(conn, params.client)? {
        println!(
            "  #{} {} {:.2}",
            order.order_id, order.order_date, order.amount
        );
    }

    let total = reports::total_amount_for_client(conn, params.total_client)?;
    println!(
        "\nTotal amount for client {}: {}",
        params.total_client, total
    );

    println!("\nClients with orders over {}:", params.threshold);
    print_client_listing(&reports::clients_with_order_over(conn, params.threshold)?);

    println!("\nClients with orders after {}:", params.cutoff);
    print_client_listing(&reports::clients_with_order_after(conn, &params.cutoff)?);

    Ok(())
}

fn print_client_listing(clients: &[ClientSummary]) {
    for client in clients {
        println!(
            "  {} {} {} <{}>",
            client.client_id, client.last_name, client.first_name, client.email
        );
    }
}
