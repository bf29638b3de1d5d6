use serde::{Deserialize, Serialize};

/// Client - a customer record with contact details and a marketing-consent flag
///
/// Clients are created once per load run from an external record and are
/// never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier. `None` when the store assigns one at insert time
    /// (managed profile); `Some` when the source file supplies it
    /// (external profile).
    pub client_id: Option<i64>,

    /// Last name
    pub last_name: String,

    /// First name
    pub first_name: String,

    /// Email address (unique under the managed profile)
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Birth date, kept as opaque date-formatted text
    pub birth_date: String,

    /// Postal address
    pub address: String,

    /// Whether this client may receive marketing communications.
    /// Ingested from the closed text domain {"0", "1"}; stored as 0/1.
    pub marketing_consent: bool,
}

impl Client {
    /// SQLite representation of the consent flag
    pub fn consent_as_int(&self) -> i64 {
        if self.marketing_consent {
            1
        } else {
            0
        }
    }

    /// Check whether this record carries a source-supplied identifier
    pub fn has_supplied_id(&self) -> bool {
        self.client_id.is_some()
    }
}
