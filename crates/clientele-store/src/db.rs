//! Database connection management
//!
//! Provides utilities for opening and managing SQLite connections

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::profile::SchemaProfile;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for the given schema profile
///
/// Foreign-key enforcement is off by default in SQLite; only the managed
/// profile turns it on. The external profile matches the historical loader,
/// which declared the foreign key but never enforced it.
pub fn configure(conn: &Connection, profile: SchemaProfile) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", profile.enforces_foreign_keys())
        .map_err(from_rusqlite)?;

    Ok(())
}
