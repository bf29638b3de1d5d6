//! Clientele Store - Persistence layer with SQLite, CSV ingest, and reports
//!
//! Provides:
//! - SQLite schema with migrations framework (two schema profiles)
//! - CSV parser and batch loader for client and order exports
//! - The fixed set of read-only report queries

pub mod db;
pub mod errors;
pub mod ingest;
pub mod migrations;
pub mod profile;
pub mod reports;

// Re-export key types
pub use errors::Result;
pub use profile::SchemaProfile;
