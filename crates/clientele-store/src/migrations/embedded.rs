//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!.
//! Each schema profile carries its own set; ids are shared across profiles
//! so the checksum ledger catches a profile switch on an existing store.

use crate::profile::SchemaProfile;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations for a profile, in order
pub fn get_migrations(profile: SchemaProfile) -> Vec<Migration> {
    match profile {
        SchemaProfile::External => vec![Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/external/001_initial_schema.sql"),
        }],
        SchemaProfile::Managed => vec![Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/managed/001_initial_schema.sql"),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_share_ids_but_not_sql() {
        let external = get_migrations(SchemaProfile::External);
        let managed = get_migrations(SchemaProfile::Managed);
        assert_eq!(external.len(), managed.len());
        assert_eq!(external[0].id, managed[0].id);
        assert_ne!(external[0].sql, managed[0].sql);
    }
}
