//! Affiliation joins: a partner's linked professionals and, conversely, a
//! professional's partner affiliations.
//!
//! Joins are permissive: a link whose professional was deleted is still
//! returned, with the professional side carried as `None` so callers can
//! surface the dangling state instead of dropping the row.

use rede_core::entities::{Exam, Partner, Professional, ProfessionalLink};
use rede_core::enums::Status;
use rede_core::errors::CoreError;
use rede_store::NetworkStore;

/// One row of a partner's affiliation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedProfessional {
    pub link: ProfessionalLink,
    /// `None` when the link's professional reference dangles.
    pub professional: Option<Professional>,
}

/// One row of a professional's affiliation list: the partner, the link terms,
/// and the partner's active services attributed to this professional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliation {
    pub partner: Partner,
    pub link: ProfessionalLink,
    pub services: Vec<Exam>,
}

/// A partner's links joined with the linked professionals, sorted
/// alphabetically by professional name; dangling links sort last.
pub fn partner_affiliations(
    store: &NetworkStore,
    partner_id: &str,
) -> Result<Vec<LinkedProfessional>, CoreError> {
    let partner = store.partner(partner_id)?;
    let mut rows: Vec<LinkedProfessional> = partner
        .affiliated_professionals
        .iter()
        .map(|link| LinkedProfessional {
            link: link.clone(),
            professional: store.professional(&link.professional_id).ok().cloned(),
        })
        .collect();
    rows.sort_by(|a, b| match (&a.professional, &b.professional) {
        (Some(a), Some(b)) => a.name.cmp(&b.name),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    Ok(rows)
}

/// Every partner a professional is linked to, with the link terms and the
/// partner's active services attributed to that professional, sorted
/// alphabetically by partner name.
pub fn professional_affiliations(
    store: &NetworkStore,
    professional_id: &str,
) -> Result<Vec<Affiliation>, CoreError> {
    let professional = store.professional(professional_id)?;
    let mut rows: Vec<Affiliation> = Vec::new();
    for partner in store.partners() {
        for link in &partner.affiliated_professionals {
            if link.professional_id == professional.id {
                let services = partner
                    .exams
                    .iter()
                    .filter(|e| {
                        e.professional_id.as_deref() == Some(professional_id)
                            && e.status == Status::Ativo
                    })
                    .cloned()
                    .collect();
                rows.push(Affiliation {
                    partner: partner.clone(),
                    link: link.clone(),
                    services,
                });
            }
        }
    }
    rows.sort_by(|a, b| a.partner.name.cmp(&b.partner.name));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn store() -> NetworkStore {
        NetworkStore::seeded(Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn partner_rows_carry_professional_details() {
        let store = store();
        let rows = partner_affiliations(&store, "est-1").unwrap();
        assert_eq!(rows.len(), 1);
        let prof = rows[0].professional.as_ref().unwrap();
        assert_eq!(prof.name, "Dr. João Silva");
        assert_eq!(rows[0].link.price, "R$ 200,00");
    }

    #[test]
    fn dangling_link_is_kept_with_no_professional() {
        let mut store = store();
        store.delete_professional("prof-1").unwrap();
        let rows = partner_affiliations(&store, "est-1").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].professional, None);
    }

    #[test]
    fn dangling_links_sort_after_named_ones() {
        let mut store = store();
        store
            .create_link("est-1", "prof-2", rede_store::LinkTerms::default())
            .unwrap();
        store.delete_professional("prof-1").unwrap();
        let rows = partner_affiliations(&store, "est-1").unwrap();
        assert!(rows[0].professional.is_some());
        assert_eq!(rows[1].professional, None);
    }

    #[test]
    fn professional_side_collects_all_partners_sorted_by_name() {
        let store = store();
        // prof-1 is linked to est-1 (Clínica Sorriso Feliz) and est-4 (Orto Center).
        let rows = professional_affiliations(&store, "prof-1").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].partner.name, "Clínica Sorriso Feliz");
        assert_eq!(rows[1].partner.name, "Orto Center");
    }

    #[test]
    fn services_are_active_and_attributed_only() {
        let store = store();
        let rows = professional_affiliations(&store, "prof-1").unwrap();
        let sorriso = &rows[0];
        // est-1 has four exams; three active ones attributed to prof-1, one
        // inactive unassigned.
        assert_eq!(sorriso.services.len(), 3);
        assert!(sorriso.services.iter().all(|e| e.status == Status::Ativo));
    }

    #[test]
    fn unknown_professional_is_not_found() {
        let store = store();
        assert!(professional_affiliations(&store, "prof-999").is_err());
    }
}
