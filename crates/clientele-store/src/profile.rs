//! Schema profile selection
//!
//! The source material ships two slightly different schemas for the same
//! two tables. They are modeled here as two explicit configuration profiles
//! of one schema definition, selected by the caller.

/// Which variant of the clients/orders schema a store uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaProfile {
    /// Identifiers are supplied by the source files. No email uniqueness,
    /// loose column typing, foreign keys declared but not enforced.
    External,
    /// Identifiers are assigned by the store (AUTOINCREMENT). Unique email,
    /// consent constrained to {0,1}, foreign-key enforcement on.
    Managed,
}

impl SchemaProfile {
    /// Whether the store enforces the orders -> clients foreign key
    pub fn enforces_foreign_keys(&self) -> bool {
        matches!(self, SchemaProfile::Managed)
    }

    /// Whether client/order identifiers come from the source files
    pub fn uses_supplied_ids(&self) -> bool {
        matches!(self, SchemaProfile::External)
    }

    /// Stable name used in logs and migration lookups
    pub fn name(&self) -> &'static str {
        match self {
            SchemaProfile::External => "external",
            SchemaProfile::Managed => "managed",
        }
    }
}

impl std::fmt::Display for SchemaProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
