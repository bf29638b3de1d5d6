pub mod load;
pub mod report;
pub mod run;

use clap::ValueEnum;
use clientele_store::SchemaProfile;

/// Schema profile selection on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    /// Store-assigned ids, unique email, enforced foreign keys
    Managed,
    /// Source-supplied ids, historical loose schema
    External,
}

impl From<ProfileArg> for SchemaProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Managed => SchemaProfile::Managed,
            ProfileArg::External => SchemaProfile::External,
        }
    }
}
