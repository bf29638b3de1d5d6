//! CSV ingest system
//!
//! Provides:
//! - Raw record deserialization from the original export headers
//! - Field coercion into domain types
//! - Batch loader writing both tables in one transaction

pub mod loader;
pub mod parser;
pub mod records;

pub use loader::{load_csv_files, load_records, LoadReport};
pub use parser::{parse_clients_str, parse_orders_str, read_client_records, read_order_records};
