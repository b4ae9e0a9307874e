//! Category, status, and activity-action enums for RedePro.
//!
//! `Category` and `Status` serialize with their Portuguese display labels
//! because those exact strings appear in exported reports. `ActivityAction`
//! serializes as `snake_case` and exposes the display label separately.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Top-level partner category. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    #[serde(rename = "Saúde")]
    Saude,
    #[serde(rename = "Estética")]
    Estetica,
    #[serde(rename = "Lazer")]
    Lazer,
    #[serde(rename = "Educação")]
    Educacao,
}

impl Category {
    /// All categories, in the order the niche taxonomy presents them.
    pub const ALL: [Self; 4] = [Self::Saude, Self::Estetica, Self::Educacao, Self::Lazer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saude => "Saúde",
            Self::Estetica => "Estética",
            Self::Lazer => "Lazer",
            Self::Educacao => "Educação",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Two-value status shared by partners, links, and exams.
///
/// Toggling is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Status {
    Ativo,
    Inativo,
}

impl Status {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ativo => Self::Inativo,
            Self::Inativo => Self::Ativo,
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Ativo)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Inativo => "Inativo",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityAction
// ---------------------------------------------------------------------------

/// What kind of mutation an activity-log entry records.
///
/// The original data carried these as free-text labels; the closed enum keeps
/// the analytics count ("Criação de Vínculo" within a period) an equality
/// check instead of a string comparison. `label()` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    PartnerCreated,
    PartnerUpdated,
    PartnerActivated,
    PartnerDeactivated,
    ProfessionalCreated,
    ProfessionalUpdated,
    ProfessionalDeleted,
    LinkCreated,
    LinkUpdated,
    LinkActivated,
    LinkDeactivated,
    LinkRemoved,
    ServiceCreated,
    ServiceUpdated,
    ServiceActivated,
    ServiceDeactivated,
    ServiceDeleted,
}

impl ActivityAction {
    /// Display label shown in the activity feed and detailed reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PartnerCreated => "Criação de Parceiro",
            Self::PartnerUpdated => "Edição de Parceiro",
            Self::PartnerActivated => "Ativação de Parceiro",
            Self::PartnerDeactivated => "Inativação de Parceiro",
            Self::ProfessionalCreated => "Criação de Profissional",
            Self::ProfessionalUpdated => "Edição de Profissional",
            Self::ProfessionalDeleted => "Exclusão de Profissional",
            Self::LinkCreated => "Criação de Vínculo",
            Self::LinkUpdated => "Edição de Vínculo",
            Self::LinkActivated => "Ativação de Vínculo",
            Self::LinkDeactivated => "Inativação de Vínculo",
            Self::LinkRemoved => "Remoção de Vínculo",
            Self::ServiceCreated => "Criação de Serviço",
            Self::ServiceUpdated => "Edição de Serviço",
            Self::ServiceActivated => "Ativação de Serviço",
            Self::ServiceDeactivated => "Inativação de Serviço",
            Self::ServiceDeleted => "Exclusão de Serviço",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_serializes_with_accented_labels() {
        let json = serde_json::to_string(&Category::Saude).unwrap();
        assert_eq!(json, "\"Saúde\"");
        let back: Category = serde_json::from_str("\"Educação\"").unwrap();
        assert_eq!(back, Category::Educacao);
    }

    #[test]
    fn status_toggle_is_involutive() {
        assert_eq!(Status::Ativo.toggled(), Status::Inativo);
        assert_eq!(Status::Inativo.toggled(), Status::Ativo);
        assert_eq!(Status::Ativo.toggled().toggled(), Status::Ativo);
    }

    #[test]
    fn status_serializes_as_display_label() {
        assert_eq!(serde_json::to_string(&Status::Ativo).unwrap(), "\"Ativo\"");
        assert_eq!(Status::Inativo.to_string(), "Inativo");
    }

    #[test]
    fn link_created_label_matches_original_data() {
        assert_eq!(ActivityAction::LinkCreated.label(), "Criação de Vínculo");
        assert_eq!(
            serde_json::to_string(&ActivityAction::LinkCreated).unwrap(),
            "\"link_created\""
        );
    }
}
