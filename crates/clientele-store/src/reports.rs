//! Read-only report queries
//!
//! The fixed set of reporting operations over a loaded store. Every
//! function is a stateless read against `&Connection`; an empty result set
//! is a normal outcome, never an error.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Default threshold for [`clients_with_order_over`]
pub const DEFAULT_LARGE_ORDER_THRESHOLD: f64 = 100.0;

/// Default cutoff date for [`clients_with_order_after`]
pub const DEFAULT_RECENT_ORDER_CUTOFF: &str = "2023-01-01";

/// Default client for the total-amount report
pub const DEFAULT_TOTAL_CLIENT_ID: i64 = 61;

/// A client row as surfaced by the client-listing reports
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub client_id: i64,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
}

/// An order row as surfaced by the per-client history report
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_id: i64,
    pub order_date: String,
    pub amount: f64,
}

fn row_to_client_summary(row: &rusqlite::Row) -> rusqlite::Result<ClientSummary> {
    Ok(ClientSummary {
        client_id: row.get(0)?,
        last_name: row.get(1)?,
        first_name: row.get(2)?,
        email: row.get(3)?,
    })
}

fn collect_client_summaries(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<ClientSummary>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, row_to_client_summary)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Clients whose marketing-consent flag is set
pub fn consenting_clients(conn: &Connection) -> Result<Vec<ClientSummary>> {
    collect_client_summaries(
        conn,
        "SELECT client_id, last_name, first_name, email
         FROM clients
         WHERE marketing_consent = 1
         ORDER BY client_id",
        [],
    )
}

/// All orders placed by one client
pub fn orders_for_client(conn: &Connection, client_id: i64) -> Result<Vec<OrderLine>> {
    let mut stmt = conn
        .prepare(
            "SELECT order_id, order_date, amount
             FROM orders
             WHERE client_id = ?1
             ORDER BY order_id",
        )
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([client_id], |row| {
            Ok(OrderLine {
                order_id: row.get(0)?,
                order_date: row.get(1)?,
                amount: row.get(2)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Sum of order amounts for one client
///
/// Exactly 0.0 when the client has no orders; absence of rows is not an
/// error.
pub fn total_amount_for_client(conn: &Connection, client_id: i64) -> Result<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(amount), 0.0) FROM orders WHERE client_id = ?1",
        [client_id],
        |row| row.get(0),
    )
    .map_err(from_rusqlite)
}

/// Clients with at least one order strictly above `threshold`
///
/// Distinct over the join: a client with several qualifying orders appears
/// once. Default threshold: [`DEFAULT_LARGE_ORDER_THRESHOLD`].
pub fn clients_with_order_over(conn: &Connection, threshold: f64) -> Result<Vec<ClientSummary>> {
    collect_client_summaries(
        conn,
        "SELECT DISTINCT c.client_id, c.last_name, c.first_name, c.email
         FROM clients c
         JOIN orders o ON c.client_id = o.client_id
         WHERE o.amount > ?1
         ORDER BY c.client_id",
        [threshold],
    )
}

/// Clients with at least one order strictly after `cutoff`
///
/// The comparison is lexicographic over `YYYY-MM-DD` text, so an order
/// dated exactly `cutoff` does not qualify. Default cutoff:
/// [`DEFAULT_RECENT_ORDER_CUTOFF`].
pub fn clients_with_order_after(conn: &Connection, cutoff: &str) -> Result<Vec<ClientSummary>> {
    collect_client_summaries(
        conn,
        "SELECT DISTINCT c.client_id, c.last_name, c.first_name, c.email
         FROM clients c
         JOIN orders o ON c.client_id = o.client_id
         WHERE o.order_date > ?1
         ORDER BY c.client_id",
        [cutoff],
    )
}
