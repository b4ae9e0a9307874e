//! Professional repository: CRUD and list-page search.

use chrono::Utc;

use rede_core::entities::Professional;
use rede_core::enums::ActivityAction;
use rede_core::errors::CoreError;
use rede_core::ids::PREFIX_PROFESSIONAL;

use crate::inputs::{ProfessionalDraft, ProfessionalUpdate};
use crate::store::NetworkStore;

impl NetworkStore {
    #[must_use]
    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn professional(&self, id: &str) -> Result<&Professional, CoreError> {
        self.professionals
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("professional", id))
    }

    pub fn create_professional(&mut self, draft: ProfessionalDraft) -> Professional {
        let professional = Professional {
            id: self.next_id(PREFIX_PROFESSIONAL),
            name: draft.name,
            register: draft.register,
            specialty: draft.specialty,
            registered_at: Utc::now(),
        };
        self.professionals.push(professional.clone());
        self.log_activity(
            None,
            Some(&professional.id),
            ActivityAction::ProfessionalCreated,
            format!("Profissional '{}' foi cadastrado.", professional.name),
        );
        professional
    }

    pub fn update_professional(
        &mut self,
        id: &str,
        update: ProfessionalUpdate,
    ) -> Result<Professional, CoreError> {
        let updated = {
            let professional = self
                .professionals
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| CoreError::not_found("professional", id))?;
            if let Some(name) = update.name {
                professional.name = name;
            }
            if let Some(register) = update.register {
                professional.register = register;
            }
            if let Some(specialty) = update.specialty {
                professional.specialty = specialty;
            }
            professional.clone()
        };
        self.log_activity(
            None,
            Some(id),
            ActivityAction::ProfessionalUpdated,
            format!("Dados do profissional '{}' foram atualizados.", updated.name),
        );
        Ok(updated)
    }

    /// Hard-remove a professional. Existing affiliation links keep their
    /// (now dangling) reference; the read path surfaces those explicitly.
    pub fn delete_professional(&mut self, id: &str) -> Result<Professional, CoreError> {
        let idx = self
            .professionals
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("professional", id))?;
        let removed = self.professionals.remove(idx);
        self.log_activity(
            None,
            Some(id),
            ActivityAction::ProfessionalDeleted,
            format!("Profissional '{}' foi excluído.", removed.name),
        );
        Ok(removed)
    }

    /// Case-insensitive substring search over name, register, and specialty.
    #[must_use]
    pub fn search_professionals(&self, term: &str) -> Vec<&Professional> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.professionals.iter().collect();
        }
        self.professionals
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.register.to_lowercase().contains(&term)
                    || p.specialty.to_lowercase().contains(&term)
            })
            .collect()
    }
}
