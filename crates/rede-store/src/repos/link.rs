//! Affiliation link repository: link professionals to partners and manage
//! the link's commercial terms.

use rede_core::entities::{Professional, ProfessionalLink};
use rede_core::enums::{ActivityAction, Status};
use rede_core::errors::CoreError;
use rede_core::ids::PREFIX_LINK;

use crate::inputs::LinkTerms;
use crate::store::NetworkStore;

impl NetworkStore {
    /// Link a professional to a partner. The professional must exist and must
    /// not already be linked to this partner; new links start active.
    pub fn create_link(
        &mut self,
        partner_id: &str,
        professional_id: &str,
        terms: LinkTerms,
    ) -> Result<ProfessionalLink, CoreError> {
        let professional_name = self.professional(professional_id)?.name.clone();
        let id = self.next_id(PREFIX_LINK);

        let link = {
            let partner = self.partner_mut(partner_id)?;
            if partner
                .affiliated_professionals
                .iter()
                .any(|l| l.professional_id == professional_id)
            {
                return Err(CoreError::Validation(format!(
                    "professional '{professional_id}' is already linked to partner '{partner_id}'"
                )));
            }
            let link = ProfessionalLink {
                id,
                professional_id: professional_id.to_string(),
                price: terms.price,
                discount: terms.discount,
                observation: terms.observation,
                status: Status::Ativo,
            };
            partner.affiliated_professionals.push(link.clone());
            link
        };

        self.log_activity(
            Some(partner_id),
            Some(professional_id),
            ActivityAction::LinkCreated,
            format!("Profissional '{professional_name}' foi vinculado."),
        );
        Ok(link)
    }

    /// Replace the commercial terms of an existing link.
    pub fn update_link(
        &mut self,
        partner_id: &str,
        link_id: &str,
        terms: LinkTerms,
    ) -> Result<ProfessionalLink, CoreError> {
        let updated = {
            let partner = self.partner_mut(partner_id)?;
            let link = partner
                .affiliated_professionals
                .iter_mut()
                .find(|l| l.id == link_id)
                .ok_or_else(|| CoreError::not_found("link", link_id))?;
            link.price = terms.price;
            link.discount = terms.discount;
            link.observation = terms.observation;
            link.clone()
        };
        let name = self.professional_name_or_id(&updated.professional_id);
        self.log_activity(
            Some(partner_id),
            Some(&updated.professional_id),
            ActivityAction::LinkUpdated,
            format!("O vínculo com '{name}' foi atualizado."),
        );
        Ok(updated)
    }

    /// Flip the link status between Ativo and Inativo.
    pub fn toggle_link_status(
        &mut self,
        partner_id: &str,
        link_id: &str,
    ) -> Result<ProfessionalLink, CoreError> {
        let updated = {
            let partner = self.partner_mut(partner_id)?;
            let link = partner
                .affiliated_professionals
                .iter_mut()
                .find(|l| l.id == link_id)
                .ok_or_else(|| CoreError::not_found("link", link_id))?;
            link.status = link.status.toggled();
            link.clone()
        };
        let name = self.professional_name_or_id(&updated.professional_id);
        let action = if updated.status.is_active() {
            ActivityAction::LinkActivated
        } else {
            ActivityAction::LinkDeactivated
        };
        self.log_activity(
            Some(partner_id),
            Some(&updated.professional_id),
            action,
            format!(
                "O vínculo com '{name}' foi marcado como {}.",
                updated.status.as_str().to_lowercase()
            ),
        );
        Ok(updated)
    }

    /// Remove exactly one link by id; the partner's other links are untouched.
    pub fn remove_link(
        &mut self,
        partner_id: &str,
        link_id: &str,
    ) -> Result<ProfessionalLink, CoreError> {
        let removed = {
            let partner = self.partner_mut(partner_id)?;
            let idx = partner
                .affiliated_professionals
                .iter()
                .position(|l| l.id == link_id)
                .ok_or_else(|| CoreError::not_found("link", link_id))?;
            partner.affiliated_professionals.remove(idx)
        };
        let name = self.professional_name_or_id(&removed.professional_id);
        self.log_activity(
            Some(partner_id),
            Some(&removed.professional_id),
            ActivityAction::LinkRemoved,
            format!("O vínculo com '{name}' foi removido."),
        );
        Ok(removed)
    }

    /// Professionals not yet linked to the given partner, filtered by a
    /// case-insensitive name search (candidates for the link dialog).
    pub fn unaffiliated_professionals(
        &self,
        partner_id: &str,
        search: &str,
    ) -> Result<Vec<&Professional>, CoreError> {
        let partner = self.partner(partner_id)?;
        let search = search.trim().to_lowercase();
        Ok(self
            .professionals
            .iter()
            .filter(|prof| {
                !partner
                    .affiliated_professionals
                    .iter()
                    .any(|l| l.professional_id == prof.id)
            })
            .filter(|prof| search.is_empty() || prof.name.to_lowercase().contains(&search))
            .collect())
    }

    /// Display name for a professional reference; falls back to the raw id
    /// when the reference dangles.
    fn professional_name_or_id(&self, professional_id: &str) -> String {
        self.professional(professional_id)
            .map_or_else(|_| professional_id.to_string(), |p| p.name.clone())
    }
}
