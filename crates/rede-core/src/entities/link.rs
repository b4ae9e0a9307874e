use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Status;

/// The join record connecting a professional to a partner.
///
/// Owned by exactly one partner; `professional_id` references the
/// professional collection and may dangle (see `rede-query` for the read
/// policy). Price and discount are free-text commercial terms.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfessionalLink {
    pub id: String,
    pub professional_id: String,
    pub price: String,
    pub discount: String,
    pub observation: String,
    pub status: Status,
}
