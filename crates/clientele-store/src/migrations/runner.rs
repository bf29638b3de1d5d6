//! Migration runner
//!
//! Applies migrations with checksums and idempotency

#![allow(clippy::result_large_err)]

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use crate::profile::SchemaProfile;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations for the given profile
///
/// Re-applying is a no-op as long as the recorded checksum of each applied
/// migration matches the embedded SQL. A mismatch (notably: opening a store
/// that was initialised with the other profile) is a fatal error.
pub fn apply_migrations(conn: &mut Connection, profile: SchemaProfile) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations(profile) {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    tracing::debug!(profile = profile.name(), "schema migrations up to date");
    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    // Check if migration already applied
    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        // Idempotent re-apply, but only for the same SQL
        match recorded {
            Some(prev) if prev != checksum => {
                return Err(checksum_mismatch(migration_id, &prev, &checksum));
            }
            _ => return Ok(()),
        }
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(migration_id, "applied migration");
    Ok(())
}
