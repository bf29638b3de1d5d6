//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Embedded SQL migrations, one set per schema profile

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
