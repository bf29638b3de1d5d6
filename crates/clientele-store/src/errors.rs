//! Error handling for clientele-store
//!
//! Wraps clientele-core ClienteleError with store-specific helpers

use clientele_core::errors::{ClienteleError, ClienteleErrorKind};

/// Result type alias using ClienteleError
pub type Result<T> = std::result::Result<T, ClienteleError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ClienteleError {
    ClienteleError::new(ClienteleErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ClienteleError {
    ClienteleError::new(ClienteleErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a coercion error for a source record field
pub fn coercion_error(op: &str, record: usize, reason: &str) -> ClienteleError {
    ClienteleError::new(ClienteleErrorKind::Coercion)
        .with_op(op)
        .with_record(record)
        .with_message(reason.to_string())
}

/// Create an ingest validation error
pub fn ingest_validation(op: &str, reason: &str) -> ClienteleError {
    ClienteleError::new(ClienteleErrorKind::InvalidInput)
        .with_op(op)
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures (duplicate email, consent CHECK, foreign key) map to
/// `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ClienteleError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ClienteleErrorKind::ConstraintViolation
        }
        _ => ClienteleErrorKind::Persistence,
    };
    ClienteleError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ClienteleError {
    ClienteleError::new(ClienteleErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
