use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An individual practitioner, affiliated with zero or more partners.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Professional {
    pub id: String,
    pub name: String,
    /// Professional registration number, e.g. "CRO-SP 12345".
    pub register: String,
    pub specialty: String,
    pub registered_at: DateTime<Utc>,
}
