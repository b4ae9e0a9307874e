use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityAction;

/// An append-only activity trail entry recording a user-triggered mutation.
///
/// The log is kept newest-first. Either or both entity references may be set
/// depending on what the mutation touched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityLogEntry {
    pub id: String,
    pub partner_id: Option<String>,
    pub professional_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: ActivityAction,
    pub details: String,
}
