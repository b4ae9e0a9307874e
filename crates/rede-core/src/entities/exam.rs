use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Status;

/// A service or procedure offered by a partner.
///
/// `professional_id`, when present, attributes the service to one of the
/// partner's affiliated professionals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Exam {
    pub id: String,
    pub name: String,
    /// Nomenclature code, e.g. "ODT001".
    pub nomenclature: String,
    pub discount: String,
    pub observations: String,
    pub status: Status,
    pub professional_id: Option<String>,
}
