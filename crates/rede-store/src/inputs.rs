//! Input structs for store mutations.
//!
//! Drafts carry the fields a creation dialog collects; updates carry the
//! fields the edit dialog exposes, each optional so unset fields are left
//! untouched. `Option<Option<String>>` distinguishes "leave alone" from
//! "clear".

use serde::Serialize;

use rede_core::enums::{Category, Status};

/// Fields collected by the "new partner" dialog.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerDraft {
    pub name: String,
    pub category: Category,
    pub kind: String,
    pub cnpj: String,
    pub contact: String,
    pub city: String,
    pub address: String,
    pub niche: String,
    pub logo_url: Option<String>,
}

/// Fields exposed by the partner edit dialog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartnerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<Option<String>>,
}

/// Fields collected by the "new professional" dialog.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalDraft {
    pub name: String,
    pub register: String,
    pub specialty: String,
}

/// Fields exposed by the professional edit dialog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfessionalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// Commercial terms of an affiliation link (all free text).
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkTerms {
    pub price: String,
    pub discount: String,
    pub observation: String,
}

/// Fields collected by the exam dialog (used for both create and edit;
/// the dialog always submits the full field set).
#[derive(Debug, Clone, Serialize)]
pub struct ExamDraft {
    pub name: String,
    pub nomenclature: String,
    pub discount: String,
    pub observations: String,
    pub status: Status,
    pub professional_id: Option<String>,
}
