//! Batch loader
//!
//! Stages both exports, then writes everything inside one transaction:
//! clients first, orders second, commit once. Any failure before the
//! commit rolls the whole run back, so the store never holds a partial
//! load.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::ingest::parser::{read_client_records, read_order_records};
use crate::profile::SchemaProfile;
use clientele_core::errors::{ClienteleError, ClienteleErrorKind};
use clientele_core::model::{Client, Order};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Transaction};
use std::path::Path;

/// Row counts from a committed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub clients_inserted: usize,
    pub orders_inserted: usize,
}

/// SQLite's historical bind-parameter floor; multi-row inserts are chunked
/// so a single statement never exceeds it.
const MAX_BIND_PARAMS: usize = 999;

/// Parse both exports and load them into the store
///
/// This is the main ingest entry point. Schema migrations must already be
/// applied for the same profile.
pub fn load_csv_files(
    conn: &mut Connection,
    profile: SchemaProfile,
    clients_path: &Path,
    orders_path: &Path,
) -> Result<LoadReport> {
    let clients = read_client_records(clients_path)?;
    let orders = read_order_records(orders_path)?;
    load_records(conn, profile, &clients, &orders)
}

/// Load already-coerced records into the store in one transaction
pub fn load_records(
    conn: &mut Connection,
    profile: SchemaProfile,
    clients: &[Client],
    orders: &[Order],
) -> Result<LoadReport> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let clients_inserted = insert_clients(&tx, profile, clients)?;
    let orders_inserted = insert_orders(&tx, profile, orders)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(
        profile = profile.name(),
        clients_inserted,
        orders_inserted,
        "load committed"
    );

    Ok(LoadReport {
        clients_inserted,
        orders_inserted,
    })
}

fn insert_clients(tx: &Transaction, profile: SchemaProfile, clients: &[Client]) -> Result<usize> {
    let columns: &[&str] = if profile.uses_supplied_ids() {
        &[
            "client_id",
            "last_name",
            "first_name",
            "email",
            "phone",
            "birth_date",
            "address",
            "marketing_consent",
        ]
    } else {
        &[
            "last_name",
            "first_name",
            "email",
            "phone",
            "birth_date",
            "address",
            "marketing_consent",
        ]
    };

    let mut rows = Vec::with_capacity(clients.len());
    for (idx, client) in clients.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        if profile.uses_supplied_ids() {
            let id = client.client_id.ok_or_else(|| {
                ClienteleError::new(ClienteleErrorKind::InvalidInput)
                    .with_op("load_clients")
                    .with_record(idx + 1)
                    .with_message("external profile requires a source-supplied Client_ID")
            })?;
            row.push(Value::Integer(id));
        }
        row.push(Value::Text(client.last_name.clone()));
        row.push(Value::Text(client.first_name.clone()));
        row.push(Value::Text(client.email.clone()));
        row.push(Value::Text(client.phone.clone()));
        row.push(Value::Text(client.birth_date.clone()));
        row.push(Value::Text(client.address.clone()));
        row.push(Value::Integer(client.consent_as_int()));
        rows.push(row);
    }

    insert_rows(tx, "clients", columns, rows)
}

fn insert_orders(tx: &Transaction, profile: SchemaProfile, orders: &[Order]) -> Result<usize> {
    let columns: &[&str] = if profile.uses_supplied_ids() {
        &["order_id", "client_id", "order_date", "amount"]
    } else {
        &["client_id", "order_date", "amount"]
    };

    let mut rows = Vec::with_capacity(orders.len());
    for (idx, order) in orders.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        if profile.uses_supplied_ids() {
            let id = order.order_id.ok_or_else(|| {
                ClienteleError::new(ClienteleErrorKind::InvalidInput)
                    .with_op("load_orders")
                    .with_record(idx + 1)
                    .with_message("external profile requires a source-supplied Commande_ID")
            })?;
            row.push(Value::Integer(id));
        }
        row.push(Value::Integer(order.client_id));
        row.push(Value::Text(order.order_date.clone()));
        row.push(Value::Real(order.amount));
        rows.push(row);
    }

    insert_rows(tx, "orders", columns, rows)
}

/// Multi-row INSERT, chunked below the bind-parameter limit, preserving
/// source order
fn insert_rows(
    tx: &Transaction,
    table: &str,
    columns: &[&str],
    rows: Vec<Vec<Value>>,
) -> Result<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    let rows_per_chunk = (MAX_BIND_PARAMS / columns.len()).max(1);
    let placeholder_group = format!("({})", vec!["?"; columns.len()].join(", "));

    let mut inserted = 0;
    for chunk in rows.chunks(rows_per_chunk) {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            columns.join(", "),
            vec![placeholder_group.as_str(); chunk.len()].join(", ")
        );

        let params = chunk.iter().flatten().cloned();
        inserted += tx
            .execute(&sql, params_from_iter(params))
            .map_err(from_rusqlite)?;
    }

    Ok(inserted)
}
