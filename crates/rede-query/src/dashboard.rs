//! Dashboard aggregates over the full partner collection.

use rede_core::enums::Status;
use rede_store::NetworkStore;

/// Headline numbers and rankings for the main panel. Recomputed from scratch
/// on demand; the collections are tens of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_partners: usize,
    pub active_partners: usize,
    pub total_professionals: usize,
    /// Sum of affiliation-list lengths across all partners.
    pub total_affiliations: usize,
    /// Partners whose kind is exactly "Hospital".
    pub hospital_count: usize,
    /// Partners whose kind contains "clínica" (case-insensitive).
    pub clinic_count: usize,
    /// (city, partner count), descending by count; ties keep the order the
    /// city was first seen in.
    pub city_ranking: Vec<(String, usize)>,
    /// (niche, partner count), same ordering rules as the city ranking.
    pub niche_ranking: Vec<(String, usize)>,
}

impl DashboardSummary {
    #[must_use]
    pub fn compute(store: &NetworkStore) -> Self {
        let partners = store.partners();

        let mut city_ranking: Vec<(String, usize)> = Vec::new();
        let mut niche_ranking: Vec<(String, usize)> = Vec::new();
        for partner in partners {
            bump(&mut city_ranking, &partner.city);
            bump(&mut niche_ranking, &partner.niche);
        }
        // Stable sort keeps encounter order for equal counts.
        city_ranking.sort_by(|a, b| b.1.cmp(&a.1));
        niche_ranking.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            total_partners: partners.len(),
            active_partners: partners
                .iter()
                .filter(|p| p.status == Status::Ativo)
                .count(),
            total_professionals: store.professionals().len(),
            total_affiliations: partners
                .iter()
                .map(|p| p.affiliated_professionals.len())
                .sum(),
            hospital_count: partners.iter().filter(|p| p.kind == "Hospital").count(),
            clinic_count: partners
                .iter()
                .filter(|p| p.kind.to_lowercase().contains("clínica"))
                .count(),
            city_ranking,
            niche_ranking,
        }
    }
}

fn bump(counts: &mut Vec<(String, usize)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some((_, n)) => *n += 1,
        None => counts.push((key.to_string(), 1)),
    }
}
