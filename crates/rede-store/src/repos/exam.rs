//! Exam/service repository: a partner's service catalog with optional
//! professional attribution.

use rede_core::entities::Exam;
use rede_core::enums::{ActivityAction, Status};
use rede_core::errors::CoreError;
use rede_core::ids::PREFIX_EXAM;

use crate::inputs::ExamDraft;
use crate::store::NetworkStore;

/// Label used whenever a service carries no (or a dangling) professional.
const UNASSIGNED: &str = "Não atribuído";

/// An exam joined with the display name of its attributed professional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamWithProfessional {
    pub exam: Exam,
    pub professional_name: String,
}

impl NetworkStore {
    /// Add a service to a partner's catalog.
    pub fn create_exam(&mut self, partner_id: &str, draft: ExamDraft) -> Result<Exam, CoreError> {
        let label = self.attribution_label(draft.professional_id.as_deref());
        let id = self.next_id(PREFIX_EXAM);
        let exam = {
            let partner = self.partner_mut(partner_id)?;
            let exam = Exam {
                id,
                name: draft.name,
                nomenclature: draft.nomenclature,
                discount: draft.discount,
                observations: draft.observations,
                status: draft.status,
                professional_id: draft.professional_id,
            };
            partner.exams.push(exam.clone());
            exam
        };
        self.log_activity(
            Some(partner_id),
            exam.professional_id.as_deref(),
            ActivityAction::ServiceCreated,
            format!(
                "O serviço '{}' foi adicionado. Profissional: {label}.",
                exam.name
            ),
        );
        Ok(exam)
    }

    /// Replace all editable fields of a service, keeping its id.
    pub fn update_exam(
        &mut self,
        partner_id: &str,
        exam_id: &str,
        draft: ExamDraft,
    ) -> Result<Exam, CoreError> {
        let label = self.attribution_label(draft.professional_id.as_deref());
        let updated = {
            let partner = self.partner_mut(partner_id)?;
            let exam = partner
                .exams
                .iter_mut()
                .find(|e| e.id == exam_id)
                .ok_or_else(|| CoreError::not_found("exam", exam_id))?;
            exam.name = draft.name;
            exam.nomenclature = draft.nomenclature;
            exam.discount = draft.discount;
            exam.observations = draft.observations;
            exam.status = draft.status;
            exam.professional_id = draft.professional_id;
            exam.clone()
        };
        self.log_activity(
            Some(partner_id),
            updated.professional_id.as_deref(),
            ActivityAction::ServiceUpdated,
            format!(
                "O serviço '{}' foi atualizado. Profissional: {label}.",
                updated.name
            ),
        );
        Ok(updated)
    }

    /// Flip a service between Ativo and Inativo.
    pub fn toggle_exam_status(
        &mut self,
        partner_id: &str,
        exam_id: &str,
    ) -> Result<Exam, CoreError> {
        let updated = {
            let partner = self.partner_mut(partner_id)?;
            let exam = partner
                .exams
                .iter_mut()
                .find(|e| e.id == exam_id)
                .ok_or_else(|| CoreError::not_found("exam", exam_id))?;
            exam.status = exam.status.toggled();
            exam.clone()
        };
        let action = if updated.status.is_active() {
            ActivityAction::ServiceActivated
        } else {
            ActivityAction::ServiceDeactivated
        };
        self.log_activity(
            Some(partner_id),
            None,
            action,
            format!(
                "O serviço '{}' foi marcado como {}.",
                updated.name,
                updated.status.as_str().to_lowercase()
            ),
        );
        Ok(updated)
    }

    /// Remove a service from the partner's catalog.
    pub fn delete_exam(&mut self, partner_id: &str, exam_id: &str) -> Result<Exam, CoreError> {
        let removed = {
            let partner = self.partner_mut(partner_id)?;
            let idx = partner
                .exams
                .iter()
                .position(|e| e.id == exam_id)
                .ok_or_else(|| CoreError::not_found("exam", exam_id))?;
            partner.exams.remove(idx)
        };
        self.log_activity(
            Some(partner_id),
            None,
            ActivityAction::ServiceDeleted,
            format!("O serviço '{}' foi excluído.", removed.name),
        );
        Ok(removed)
    }

    /// A partner's services filtered by a case-insensitive substring over
    /// name and nomenclature, each joined with its attribution label.
    pub fn search_partner_exams(
        &self,
        partner_id: &str,
        term: &str,
    ) -> Result<Vec<ExamWithProfessional>, CoreError> {
        let partner = self.partner(partner_id)?;
        let term = term.trim().to_lowercase();
        Ok(partner
            .exams
            .iter()
            .filter(|e| {
                term.is_empty()
                    || e.name.to_lowercase().contains(&term)
                    || e.nomenclature.to_lowercase().contains(&term)
            })
            .map(|e| ExamWithProfessional {
                exam: e.clone(),
                professional_name: self.attribution_label(e.professional_id.as_deref()),
            })
            .collect())
    }

    fn attribution_label(&self, professional_id: Option<&str>) -> String {
        professional_id
            .and_then(|id| self.professional(id).ok())
            .map_or_else(|| UNASSIGNED.to_string(), |p| p.name.clone())
    }
}
