//! CSV parsing entry points
//!
//! Reads a whole export into memory, coercing each record as it goes. The
//! first malformed record aborts the parse, so nothing reaches the store
//! from a bad file.

#![allow(clippy::result_large_err)]

use crate::errors::{ingest_validation, io_error, Result};
use crate::ingest::records::{RawClient, RawOrder};
use clientele_core::model::{Client, Order};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read and coerce the clients export
pub fn read_client_records(path: &Path) -> Result<Vec<Client>> {
    let file = File::open(path).map_err(|e| io_error("read_client_records", e))?;
    parse_records("parse_clients", file, RawClient::coerce)
}

/// Read and coerce the orders export
pub fn read_order_records(path: &Path) -> Result<Vec<Order>> {
    let file = File::open(path).map_err(|e| io_error("read_order_records", e))?;
    parse_records("parse_orders", file, RawOrder::coerce)
}

/// Parse a clients export from a string
pub fn parse_clients_str(content: &str) -> Result<Vec<Client>> {
    parse_records("parse_clients", content.as_bytes(), RawClient::coerce)
}

/// Parse an orders export from a string
pub fn parse_orders_str(content: &str) -> Result<Vec<Order>> {
    parse_records("parse_orders", content.as_bytes(), RawOrder::coerce)
}

fn parse_records<Raw, Out, R>(
    op: &'static str,
    reader: R,
    coerce: fn(Raw, usize) -> Result<Out>,
) -> Result<Vec<Out>>
where
    Raw: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut out = Vec::new();

    for (idx, row) in csv_reader.deserialize::<Raw>().enumerate() {
        let record = idx + 1;
        let raw = row.map_err(|e| {
            ingest_validation(op, &format!("malformed CSV at record {}: {}", record, e))
        })?;
        out.push(coerce(raw, record)?);
    }

    tracing::debug!(op, records = out.len(), "parsed export");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENTS_CSV: &str = "\
Client_ID,Nom,Prénom,Email,Téléphone,Date_Naissance,Adresse,Consentement_Marketing
1,Durand,Claire,claire.durand@example.com,0601020304,1985-04-12,4 rue des Lilas,1
2,Martin,Paul,paul.martin@example.com,0605040302,1990-11-30,12 avenue de la Gare,0
";

    const ORDERS_CSV: &str = "\
Commande_ID,Client_ID,Date_Commande,Montant_Commande
10,1,2023-02-14,120.50
11,2,2022-12-31,35.00
";

    #[test]
    fn test_parse_clients_preserves_source_order() {
        let clients = parse_clients_str(CLIENTS_CSV).unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].client_id, Some(1));
        assert_eq!(clients[0].last_name, "Durand");
        assert!(clients[0].marketing_consent);
        assert_eq!(clients[1].email, "paul.martin@example.com");
        assert!(!clients[1].marketing_consent);
    }

    #[test]
    fn test_parse_orders() {
        let orders = parse_orders_str(ORDERS_CSV).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, Some(10));
        assert_eq!(orders[0].client_id, 1);
        assert_eq!(orders[0].order_date, "2023-02-14");
        assert_eq!(orders[0].amount, 120.50);
    }

    #[test]
    fn test_first_bad_record_aborts_parse() {
        let csv = "\
Commande_ID,Client_ID,Date_Commande,Montant_Commande
10,1,2023-02-14,120.50
11,deux,2022-12-31,35.00
";
        let err = parse_orders_str(csv).unwrap_err();
        assert_eq!(err.record(), Some(2));
    }

    #[test]
    fn test_missing_id_column_is_accepted() {
        // Managed-profile exports may omit the identifier column entirely
        let csv = "\
Nom,Prénom,Email,Téléphone,Date_Naissance,Adresse,Consentement_Marketing
Durand,Claire,claire.durand@example.com,0601020304,1985-04-12,4 rue des Lilas,1
";
        let clients = parse_clients_str(csv).unwrap();
        assert_eq!(clients[0].client_id, None);
    }
}
