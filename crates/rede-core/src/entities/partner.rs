use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Exam, ProfessionalLink};
use crate::enums::{Category, Status};

/// A network-affiliated organization (clinic, hospital, lab, school, gym, ...).
///
/// Owns its service list and its affiliation links; the professional side of
/// each link is a reference into the professional collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Free-text organization type, e.g. "Clínica", "Hospital", "Laboratório".
    pub kind: String,
    pub cnpj: String,
    pub contact: String,
    pub city: String,
    pub address: String,
    pub status: Status,
    /// Free-text specialty label within the category (see `niches`).
    pub niche: String,
    pub logo_url: Option<String>,
    pub exams: Vec<Exam>,
    pub affiliated_professionals: Vec<ProfessionalLink>,
    pub registered_at: DateTime<Utc>,
}
