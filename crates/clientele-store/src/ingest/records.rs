//! Raw CSV records and field coercion
//!
//! The raw structs mirror the original export headers verbatim (French
//! column names, everything as text). Coercion turns them into domain
//! models, failing the whole load on the first malformed field.

#![allow(clippy::result_large_err)]

use crate::errors::{coercion_error, Result};
use clientele_core::model::{Client, Order};
use serde::Deserialize;

/// A client row exactly as it appears in the export
#[derive(Debug, Deserialize)]
pub struct RawClient {
    #[serde(rename = "Client_ID", default)]
    pub client_id: Option<String>,
    #[serde(rename = "Nom")]
    pub last_name: String,
    #[serde(rename = "Prénom")]
    pub first_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Téléphone")]
    pub phone: String,
    #[serde(rename = "Date_Naissance")]
    pub birth_date: String,
    #[serde(rename = "Adresse")]
    pub address: String,
    #[serde(rename = "Consentement_Marketing")]
    pub consent: String,
}

/// An order row exactly as it appears in the export
#[derive(Debug, Deserialize)]
pub struct RawOrder {
    #[serde(rename = "Commande_ID", default)]
    pub order_id: Option<String>,
    #[serde(rename = "Client_ID")]
    pub client_id: String,
    #[serde(rename = "Date_Commande")]
    pub order_date: String,
    #[serde(rename = "Montant_Commande")]
    pub amount: String,
}

impl RawClient {
    /// Coerce source fields to their target types
    ///
    /// `record` is the 1-based data-row number, used for error context.
    pub fn coerce(self, record: usize) -> Result<Client> {
        let client_id = parse_optional_id("load_clients", record, "Client_ID", &self.client_id)?;

        let marketing_consent = match self.consent.trim() {
            "0" => false,
            "1" => true,
            other => {
                return Err(coercion_error(
                    "load_clients",
                    record,
                    &format!("Consentement_Marketing must be 0 or 1, got '{}'", other),
                ))
            }
        };

        Ok(Client {
            client_id,
            last_name: self.last_name,
            first_name: self.first_name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
            address: self.address,
            marketing_consent,
        })
    }
}

impl RawOrder {
    /// Coerce source fields to their target types
    ///
    /// The order date is kept as opaque date-formatted text.
    pub fn coerce(self, record: usize) -> Result<Order> {
        let order_id = parse_optional_id("load_orders", record, "Commande_ID", &self.order_id)?;
        let client_id = parse_i64("load_orders", record, "Client_ID", &self.client_id)?;
        let amount = parse_f64("load_orders", record, "Montant_Commande", &self.amount)?;

        Ok(Order {
            order_id,
            client_id,
            order_date: self.order_date,
            amount,
        })
    }
}

fn parse_i64(op: &str, record: usize, field: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| coercion_error(op, record, &format!("{} must be an integer, got '{}'", field, raw)))
}

fn parse_f64(op: &str, record: usize, field: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| coercion_error(op, record, &format!("{} must be a decimal, got '{}'", field, raw)))
}

/// An identifier column may be absent or blank (store-assigned ids); a
/// present, non-blank value must still parse as an integer.
fn parse_optional_id(
    op: &str,
    record: usize,
    field: &str,
    raw: &Option<String>,
) -> Result<Option<i64>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_i64(op, record, field, value).map(Some),
    }
}
