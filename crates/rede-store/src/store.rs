//! Central store handle for all RedePro state operations.

use chrono::Utc;

use rede_core::entities::ActivityLogEntry;
use rede_core::entities::{Partner, Professional};
use rede_core::enums::ActivityAction;
use rede_core::errors::CoreError;
use rede_core::ids::{IdGenerator, PREFIX_LOG};
use rede_core::niches::NicheTree;

use crate::seed::SeedData;

/// User recorded on every activity-log entry. There is no authentication;
/// the dashboard always acts as the admin.
pub const ADMIN_USER: &str = "Admin";

/// In-memory state for one dashboard session.
///
/// Exactly one logical writer (the UI thread of the session), so mutations
/// take `&mut self` and there is no locking. Dropping the store loses all
/// changes, matching the original's reload behavior.
pub struct NetworkStore {
    pub(crate) partners: Vec<Partner>,
    pub(crate) professionals: Vec<Professional>,
    pub(crate) activity_log: Vec<ActivityLogEntry>,
    niche_tree: NicheTree,
    ids: IdGenerator,
}

impl NetworkStore {
    /// Build a store from explicit seed data.
    #[must_use]
    pub fn new(seed: SeedData) -> Self {
        Self {
            partners: seed.partners,
            professionals: seed.professionals,
            activity_log: seed.activity_log,
            niche_tree: seed.niche_tree,
            ids: IdGenerator::starting_at(seed.next_id),
        }
    }

    /// Build a store with the standard mock dataset, with seed timestamps
    /// laid out relative to `reference_now`.
    #[must_use]
    pub fn seeded(reference_now: chrono::DateTime<Utc>) -> Self {
        Self::new(SeedData::mock(reference_now))
    }

    /// An empty store (no partners, no professionals, standard taxonomy).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(SeedData::empty())
    }

    #[must_use]
    pub fn niche_tree(&self) -> &NicheTree {
        &self.niche_tree
    }

    pub(crate) fn next_id(&self, prefix: &str) -> String {
        self.ids.next_id(prefix)
    }

    /// Look up a partner mutably, by id.
    pub(crate) fn partner_mut(&mut self, id: &str) -> Result<&mut Partner, CoreError> {
        self.partners
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("partner", id))
    }

    /// Append one activity-log entry, newest first.
    pub(crate) fn log_activity(
        &mut self,
        partner_id: Option<&str>,
        professional_id: Option<&str>,
        action: ActivityAction,
        details: String,
    ) {
        let entry = ActivityLogEntry {
            id: self.next_id(PREFIX_LOG),
            partner_id: partner_id.map(ToString::to_string),
            professional_id: professional_id.map(ToString::to_string),
            timestamp: Utc::now(),
            user: ADMIN_USER.to_string(),
            action,
            details,
        };
        tracing::debug!(action = %entry.action, details = %entry.details, "activity logged");
        self.activity_log.insert(0, entry);
    }
}
