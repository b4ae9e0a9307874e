//! Partner repository: CRUD, status toggling, and list-page search.

use chrono::Utc;

use rede_core::entities::Partner;
use rede_core::enums::{ActivityAction, Category, Status};
use rede_core::errors::CoreError;
use rede_core::ids::PREFIX_PARTNER;

use crate::inputs::{PartnerDraft, PartnerUpdate};
use crate::store::NetworkStore;

impl NetworkStore {
    #[must_use]
    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn partner(&self, id: &str) -> Result<&Partner, CoreError> {
        self.partners
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("partner", id))
    }

    /// Register a new partner. New partners start active with empty exam and
    /// affiliation lists.
    pub fn create_partner(&mut self, draft: PartnerDraft) -> Partner {
        let partner = Partner {
            id: self.next_id(PREFIX_PARTNER),
            name: draft.name,
            category: draft.category,
            kind: draft.kind,
            cnpj: draft.cnpj,
            contact: draft.contact,
            city: draft.city,
            address: draft.address,
            status: Status::Ativo,
            niche: draft.niche,
            logo_url: draft.logo_url,
            exams: Vec::new(),
            affiliated_professionals: Vec::new(),
            registered_at: Utc::now(),
        };
        self.partners.push(partner.clone());
        self.log_activity(
            Some(&partner.id),
            None,
            ActivityAction::PartnerCreated,
            format!("Parceiro '{}' foi cadastrado no sistema.", partner.name),
        );
        partner
    }

    /// Apply the edit-dialog fields. Unset fields are left untouched.
    pub fn update_partner(&mut self, id: &str, update: PartnerUpdate) -> Result<Partner, CoreError> {
        let (old_name, updated) = {
            let partner = self.partner_mut(id)?;
            let old_name = partner.name.clone();
            if let Some(name) = update.name {
                partner.name = name;
            }
            if let Some(cnpj) = update.cnpj {
                partner.cnpj = cnpj;
            }
            if let Some(contact) = update.contact {
                partner.contact = contact;
            }
            if let Some(city) = update.city {
                partner.city = city;
            }
            if let Some(address) = update.address {
                partner.address = address;
            }
            if let Some(logo_url) = update.logo_url {
                partner.logo_url = logo_url;
            }
            (old_name, partner.clone())
        };
        self.log_activity(
            Some(id),
            None,
            ActivityAction::PartnerUpdated,
            format!("Dados do parceiro '{old_name}' foram atualizados."),
        );
        Ok(updated)
    }

    /// Set the partner status explicitly (the detail-page switch).
    pub fn set_partner_status(&mut self, id: &str, status: Status) -> Result<Partner, CoreError> {
        let updated = {
            let partner = self.partner_mut(id)?;
            partner.status = status;
            partner.clone()
        };
        let action = if status.is_active() {
            ActivityAction::PartnerActivated
        } else {
            ActivityAction::PartnerDeactivated
        };
        self.log_activity(
            Some(id),
            None,
            action,
            format!(
                "O parceiro foi marcado como {}.",
                status.as_str().to_lowercase()
            ),
        );
        Ok(updated)
    }

    /// List-page search: optional category tab plus a case-insensitive
    /// substring over name, city, and kind; CNPJ is matched verbatim.
    #[must_use]
    pub fn search_partners(&self, category: Option<Category>, term: &str) -> Vec<&Partner> {
        let term = term.trim().to_lowercase();
        self.partners
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.cnpj.contains(term.as_str())
                    || p.city.to_lowercase().contains(&term)
                    || p.kind.to_lowercase().contains(&term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_store;
    use pretty_assertions::assert_eq;

    fn draft() -> PartnerDraft {
        PartnerDraft {
            name: "Clínica Nova".to_string(),
            category: Category::Saude,
            kind: "Clínica".to_string(),
            cnpj: "00.000.000/0001-00".to_string(),
            contact: "(11) 90000-0000".to_string(),
            city: "São Paulo".to_string(),
            address: "R. Nova, 1".to_string(),
            niche: "Clínica Geral".to_string(),
            logo_url: None,
        }
    }

    #[test]
    fn create_partner_starts_active_and_logs() {
        let mut store = test_store();
        let before = store.activity_log().len();

        let partner = store.create_partner(draft());
        assert_eq!(partner.status, Status::Ativo);
        assert!(partner.id.starts_with("par-"));
        assert!(partner.exams.is_empty());

        let log = store.activity_log();
        assert_eq!(log.len(), before + 1);
        assert_eq!(log[0].action, ActivityAction::PartnerCreated);
        assert_eq!(log[0].partner_id.as_deref(), Some(partner.id.as_str()));
        assert!(log[0].details.contains("Clínica Nova"));
    }

    #[test]
    fn update_partner_applies_only_set_fields() {
        let mut store = test_store();
        let updated = store
            .update_partner(
                "est-1",
                PartnerUpdate {
                    city: Some("Campinas".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.city, "Campinas");
        assert_eq!(updated.name, "Clínica Sorriso Feliz");
        assert_eq!(store.activity_log()[0].action, ActivityAction::PartnerUpdated);
    }

    #[test]
    fn update_unknown_partner_is_not_found() {
        let mut store = test_store();
        let err = store
            .update_partner("est-999", PartnerUpdate::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn status_toggle_logs_matching_action() {
        let mut store = test_store();
        let updated = store.set_partner_status("est-1", Status::Inativo).unwrap();
        assert_eq!(updated.status, Status::Inativo);
        assert_eq!(
            store.activity_log()[0].action,
            ActivityAction::PartnerDeactivated
        );
        assert_eq!(
            store.activity_log()[0].details,
            "O parceiro foi marcado como inativo."
        );

        store.set_partner_status("est-1", Status::Ativo).unwrap();
        assert_eq!(
            store.activity_log()[0].action,
            ActivityAction::PartnerActivated
        );
    }

    #[test]
    fn search_matches_name_city_kind_and_cnpj() {
        let store = test_store();
        assert_eq!(store.search_partners(None, "sorriso").len(), 1);
        assert_eq!(store.search_partners(None, "curitiba").len(), 2);
        assert_eq!(store.search_partners(None, "hospital").len(), 2);
        assert_eq!(store.search_partners(None, "12.345.678").len(), 1);
    }

    #[test]
    fn search_respects_category_tab() {
        let store = test_store();
        let health = store.search_partners(Some(Category::Saude), "");
        assert_eq!(health.len(), 7);
        let leisure = store.search_partners(Some(Category::Lazer), "");
        assert_eq!(leisure.len(), 1);
        assert_eq!(leisure[0].id, "est-7");
    }
}
