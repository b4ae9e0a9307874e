//! Report filter engine.
//!
//! Two partner report modes (health and other areas) plus a direct exam
//! search. All filters are conjunctive: each set criterion narrows the
//! candidate set, an unset one is a no-op. Categorical filters (category,
//! city, kind, niche, status) match exactly; free-text service and exam
//! searches are case-insensitive.
//!
//! Matching partners keep the seed-data insertion order; only the sub-rows
//! of each partner card are narrowed to what the filter asked about.

use rede_core::entities::{Exam, Partner, Professional, ProfessionalLink};
use rede_core::enums::{Category, Status};
use rede_store::NetworkStore;

use crate::error::ReportError;

/// Status criterion for partner reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Bypass the status predicate entirely ("Todos").
    All,
    Only(Status),
}

impl StatusFilter {
    const fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => matches!(
                (wanted, status),
                (Status::Ativo, Status::Ativo) | (Status::Inativo, Status::Inativo)
            ),
        }
    }
}

impl Default for StatusFilter {
    /// Reports default to active partners only.
    fn default() -> Self {
        Self::Only(Status::Ativo)
    }
}

/// Filters for the health partner report (category fixed to Saúde).
#[derive(Debug, Clone, Default)]
pub struct HealthReportFilter {
    pub professional_id: Option<String>,
    pub partner_kind: Option<String>,
    pub niche: Option<String>,
    pub service: Option<String>,
    pub city: Option<String>,
    pub status: StatusFilter,
}

/// Filters for the "other areas" partner report. A category is mandatory;
/// niche and subcategory drill down through the taxonomy.
#[derive(Debug, Clone, Default)]
pub struct OtherReportFilter {
    pub category: Option<Category>,
    pub niche: Option<String>,
    pub subcategory: Option<String>,
    pub city: Option<String>,
    pub status: StatusFilter,
}

/// The two partner report modes.
#[derive(Debug, Clone)]
pub enum PartnerReportFilter {
    Health(HealthReportFilter),
    Other(OtherReportFilter),
}

/// Exam report criteria: a mandatory search term, optionally scoped to one
/// city.
#[derive(Debug, Clone, Default)]
pub struct ExamReportQuery {
    pub term: String,
    pub city: Option<String>,
}

/// An active affiliation link resolved to its professional. Links whose
/// professional no longer exists are omitted from report cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportProfessional {
    pub link: ProfessionalLink,
    pub professional: Professional,
}

/// One partner card of a generated report, with sub-rows narrowed to the
/// applied filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerReportRow {
    pub partner: Partner,
    /// Services relevant to the niche/service filter; every service when
    /// neither is set.
    pub services: Vec<Exam>,
    /// Active links, narrowed to the searched professional or to the
    /// professionals attributed to the shown services.
    pub professionals: Vec<ReportProfessional>,
}

/// One hit of an exam report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamReportRow {
    pub partner: Partner,
    pub exam: Exam,
}

/// The report currently held by the view.
#[derive(Debug, Clone)]
pub enum GeneratedReport {
    Partners(Vec<PartnerReportRow>),
    Exams(Vec<ExamReportRow>),
}

/// Holds the most recently generated report. The two report modes are
/// mutually exclusive: generating one drops the other. A failed generation
/// leaves the previous report in place.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    current: Option<GeneratedReport>,
}

impl ReportState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Option<&GeneratedReport> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn partner_rows(&self) -> Option<&[PartnerReportRow]> {
        match &self.current {
            Some(GeneratedReport::Partners(rows)) => Some(rows),
            _ => None,
        }
    }

    #[must_use]
    pub fn exam_rows(&self) -> Option<&[ExamReportRow]> {
        match &self.current {
            Some(GeneratedReport::Exams(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Generate a partner report, replacing whatever report was held before.
    /// Returns the result count.
    pub fn generate_partner_report(
        &mut self,
        store: &NetworkStore,
        filter: &PartnerReportFilter,
    ) -> Result<usize, ReportError> {
        let rows = partner_report(store, filter)?;
        let count = rows.len();
        tracing::info!(results = count, "partner report generated");
        self.current = Some(GeneratedReport::Partners(rows));
        Ok(count)
    }

    /// Generate an exam report, replacing whatever report was held before.
    /// Returns the result count.
    pub fn generate_exam_report(
        &mut self,
        store: &NetworkStore,
        query: &ExamReportQuery,
    ) -> Result<usize, ReportError> {
        let rows = exam_report(store, query)?;
        let count = rows.len();
        tracing::info!(results = count, "exam report generated");
        self.current = Some(GeneratedReport::Exams(rows));
        Ok(count)
    }
}

/// Run a partner report against the store.
pub fn partner_report(
    store: &NetworkStore,
    filter: &PartnerReportFilter,
) -> Result<Vec<PartnerReportRow>, ReportError> {
    let (matches, niche, service, professional_id) = match filter {
        PartnerReportFilter::Health(f) => {
            let matches: Vec<&Partner> = store
                .partners()
                .iter()
                .filter(|p| p.category == Category::Saude)
                .filter(|p| f.partner_kind.as_deref().is_none_or(|k| p.kind == k))
                .filter(|p| f.niche.as_deref().is_none_or(|n| p.niche == n))
                .filter(|p| {
                    f.service.as_deref().is_none_or(|service| {
                        let service = service.to_lowercase();
                        p.exams.iter().any(|e| e.name.to_lowercase() == service)
                    })
                })
                .filter(|p| {
                    f.professional_id.as_deref().is_none_or(|id| {
                        p.affiliated_professionals
                            .iter()
                            .any(|l| l.professional_id == id)
                    })
                })
                .filter(|p| f.city.as_deref().is_none_or(|c| p.city == c))
                .filter(|p| f.status.matches(p.status))
                .collect();
            (
                matches,
                f.niche.as_deref(),
                f.service.as_deref(),
                f.professional_id.as_deref(),
            )
        }
        PartnerReportFilter::Other(f) => {
            let category = f.category.ok_or_else(|| {
                tracing::warn!("other-areas partner report without a category");
                ReportError::MissingCategory
            })?;
            let matches: Vec<&Partner> = store
                .partners()
                .iter()
                .filter(|p| p.category == category)
                .filter(|p| f.niche.as_deref().is_none_or(|n| p.niche == n))
                .filter(|p| {
                    f.subcategory
                        .as_deref()
                        .is_none_or(|s| p.niche.to_lowercase() == s.to_lowercase())
                })
                .filter(|p| f.city.as_deref().is_none_or(|c| p.city == c))
                .filter(|p| f.status.matches(p.status))
                .collect();
            (matches, f.niche.as_deref(), f.subcategory.as_deref(), None)
        }
    };

    Ok(matches
        .into_iter()
        .map(|partner| report_row(store, partner, niche, service, professional_id))
        .collect())
}

/// Search active exams of active partners by name or nomenclature.
pub fn exam_report(
    store: &NetworkStore,
    query: &ExamReportQuery,
) -> Result<Vec<ExamReportRow>, ReportError> {
    let term = query.term.trim().to_lowercase();
    if term.is_empty() {
        tracing::warn!("exam report without a search term");
        return Err(ReportError::MissingSearchTerm);
    }

    let mut rows = Vec::new();
    for partner in store.partners() {
        if partner.status != Status::Ativo {
            continue;
        }
        if query.city.as_deref().is_some_and(|c| partner.city != c) {
            continue;
        }
        for exam in &partner.exams {
            if exam.status == Status::Ativo
                && (exam.name.to_lowercase().contains(&term)
                    || exam.nomenclature.to_lowercase().contains(&term))
            {
                rows.push(ExamReportRow {
                    partner: partner.clone(),
                    exam: exam.clone(),
                });
            }
        }
    }
    Ok(rows)
}

/// Narrow one matching partner's sub-rows to the applied filter.
fn report_row(
    store: &NetworkStore,
    partner: &Partner,
    niche: Option<&str>,
    service: Option<&str>,
    professional_id: Option<&str>,
) -> PartnerReportRow {
    let services: Vec<Exam> = if let Some(service) = service {
        let service = service.to_lowercase();
        partner
            .exams
            .iter()
            .filter(|e| e.name.to_lowercase() == service)
            .cloned()
            .collect()
    } else if let Some(niche) = niche {
        let niche_services: Vec<String> = store
            .niche_tree()
            .services(partner.category, niche)
            .unwrap_or_default()
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        partner
            .exams
            .iter()
            .filter(|e| niche_services.contains(&e.name.to_lowercase()))
            .cloned()
            .collect()
    } else {
        partner.exams.clone()
    };

    let active_links = partner
        .affiliated_professionals
        .iter()
        .filter(|l| l.status == Status::Ativo)
        .filter_map(|link| {
            store
                .professional(&link.professional_id)
                .ok()
                .map(|professional| ReportProfessional {
                    link: link.clone(),
                    professional: professional.clone(),
                })
        });

    let professionals: Vec<ReportProfessional> = if let Some(id) = professional_id {
        active_links
            .filter(|row| row.professional.id == id)
            .collect()
    } else if service.is_some() {
        let attributed: Vec<&str> = services
            .iter()
            .filter_map(|e| e.professional_id.as_deref())
            .collect();
        active_links
            .filter(|row| attributed.contains(&row.link.professional_id.as_str()))
            .collect()
    } else {
        active_links.collect()
    };

    PartnerReportRow {
        partner: partner.clone(),
        services,
        professionals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn store() -> NetworkStore {
        NetworkStore::seeded(Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap())
    }

    fn health(filter: HealthReportFilter) -> PartnerReportFilter {
        PartnerReportFilter::Health(filter)
    }

    #[test]
    fn health_report_defaults_to_active_health_partners() {
        let store = store();
        let rows = partner_report(&store, &health(HealthReportFilter::default())).unwrap();
        // 7 health partners, est-2 is inactive.
        assert_eq!(rows.len(), 6);
        assert!(
            rows.iter()
                .all(|r| r.partner.category == Category::Saude && r.partner.status == Status::Ativo)
        );
    }

    #[test]
    fn category_is_exclusive_per_partner() {
        let store = store();
        let est7 = store.partner("est-7").unwrap().clone();
        let own = partner_report(
            &store,
            &PartnerReportFilter::Other(OtherReportFilter {
                category: Some(est7.category),
                status: StatusFilter::All,
                ..Default::default()
            }),
        )
        .unwrap();
        assert!(own.iter().any(|r| r.partner.id == est7.id));

        let other = partner_report(
            &store,
            &PartnerReportFilter::Other(OtherReportFilter {
                category: Some(Category::Educacao),
                status: StatusFilter::All,
                ..Default::default()
            }),
        )
        .unwrap();
        assert!(other.iter().all(|r| r.partner.id != est7.id));
    }

    #[test]
    fn each_added_filter_never_grows_the_result() {
        let store = store();
        let base = HealthReportFilter {
            status: StatusFilter::All,
            ..Default::default()
        };
        let with_kind = HealthReportFilter {
            partner_kind: Some("Clínica".to_string()),
            ..base.clone()
        };
        let with_city = HealthReportFilter {
            city: Some("São Paulo".to_string()),
            ..with_kind.clone()
        };

        let n0 = partner_report(&store, &health(base)).unwrap().len();
        let n1 = partner_report(&store, &health(with_kind)).unwrap().len();
        let n2 = partner_report(&store, &health(with_city)).unwrap().len();
        assert!(n0 >= n1 && n1 >= n2);
        assert_eq!(n2, 2); // Clínica Sorriso Feliz and CardioCor
    }

    #[rstest]
    #[case(StatusFilter::All, 7)]
    #[case(StatusFilter::Only(Status::Ativo), 6)]
    #[case(StatusFilter::Only(Status::Inativo), 1)]
    fn status_all_is_the_union(#[case] status: StatusFilter, #[case] expected: usize) {
        let store = store();
        let rows = partner_report(
            &store,
            &health(HealthReportFilter {
                status,
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(rows.len(), expected);
    }

    #[test]
    fn other_report_requires_a_category() {
        let store = store();
        let err = partner_report(
            &store,
            &PartnerReportFilter::Other(OtherReportFilter::default()),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::MissingCategory));
    }

    #[test]
    fn professional_filter_narrows_partners_and_links() {
        let store = store();
        let rows = partner_report(
            &store,
            &health(HealthReportFilter {
                professional_id: Some("prof-1".to_string()),
                ..Default::default()
            }),
        )
        .unwrap();
        // prof-1 works at est-1 and est-4.
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.professionals.len(), 1);
            assert_eq!(row.professionals[0].professional.id, "prof-1");
        }
    }

    #[test]
    fn service_filter_narrows_shown_services_and_attribution() {
        let store = store();
        let rows = partner_report(
            &store,
            &health(HealthReportFilter {
                niche: Some("Odontologia".to_string()),
                service: Some("Limpeza Dental Completa".to_string()),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.partner.id, "est-1");
        assert_eq!(row.services.len(), 1);
        assert_eq!(row.services[0].name, "Limpeza Dental Completa");
        // Only the professional attributed to the shown service remains.
        assert_eq!(row.professionals.len(), 1);
        assert_eq!(row.professionals[0].professional.id, "prof-1");
    }

    #[test]
    fn niche_filter_without_service_narrows_by_taxonomy() {
        let store = store();
        let rows = partner_report(
            &store,
            &health(HealthReportFilter {
                niche: Some("Odontologia".to_string()),
                ..Default::default()
            }),
        )
        .unwrap();
        // est-1 and est-4 carry the Odontologia niche.
        assert_eq!(rows.len(), 2);
        let sorriso = rows.iter().find(|r| r.partner.id == "est-1").unwrap();
        // All four of est-1's exams are Odontologia taxonomy services.
        assert_eq!(sorriso.services.len(), 4);
    }

    #[test]
    fn inactive_links_are_hidden_from_report_cards() {
        let mut store = store();
        store.toggle_link_status("est-1", "aff-1").unwrap();
        let rows = partner_report(&store, &health(HealthReportFilter::default())).unwrap();
        let sorriso = rows.iter().find(|r| r.partner.id == "est-1").unwrap();
        assert!(sorriso.professionals.is_empty());
    }

    #[test]
    fn exam_search_is_case_insensitive_substring() {
        let store = store();
        let rows = exam_report(
            &store,
            &ExamReportQuery {
                term: "lim".to_string(),
                city: None,
            },
        )
        .unwrap();
        assert!(
            rows.iter()
                .any(|r| r.exam.name == "Limpeza Dental Completa")
        );
    }

    #[test]
    fn exam_search_skips_inactive_partners_and_exams() {
        let store = store();
        // est-2 is inactive; its Hemograma exam must not appear.
        let rows = exam_report(
            &store,
            &ExamReportQuery {
                term: "hemograma".to_string(),
                city: None,
            },
        )
        .unwrap();
        assert!(rows.is_empty());

        // ex1-4 (Clareamento a Laser) is inactive on an active partner.
        let rows = exam_report(
            &store,
            &ExamReportQuery {
                term: "clareamento".to_string(),
                city: None,
            },
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn exam_search_respects_city_scope() {
        let store = store();
        let all = exam_report(
            &store,
            &ExamReportQuery {
                term: "consulta".to_string(),
                city: None,
            },
        )
        .unwrap();
        assert_eq!(all.len(), 2);

        let scoped = exam_report(
            &store,
            &ExamReportQuery {
                term: "consulta".to_string(),
                city: Some("Curitiba".to_string()),
            },
        )
        .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].partner.id, "est-10");
    }

    #[test]
    fn empty_search_term_is_rejected() {
        let store = store();
        let err = exam_report(
            &store,
            &ExamReportQuery {
                term: "   ".to_string(),
                city: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::MissingSearchTerm));
    }

    #[test]
    fn generating_one_report_drops_the_other() {
        let store = store();
        let mut state = ReportState::new();
        state
            .generate_partner_report(&store, &health(HealthReportFilter::default()))
            .unwrap();
        assert!(state.partner_rows().is_some());

        state
            .generate_exam_report(
                &store,
                &ExamReportQuery {
                    term: "consulta".to_string(),
                    city: None,
                },
            )
            .unwrap();
        assert!(state.partner_rows().is_none());
        assert!(state.exam_rows().is_some());
    }

    #[test]
    fn failed_generation_keeps_the_previous_report() {
        let store = store();
        let mut state = ReportState::new();
        state
            .generate_partner_report(&store, &health(HealthReportFilter::default()))
            .unwrap();
        let err = state
            .generate_exam_report(
                &store,
                &ExamReportQuery {
                    term: String::new(),
                    city: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, ReportError::MissingSearchTerm));
        assert!(state.partner_rows().is_some());
    }
}
