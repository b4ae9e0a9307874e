//! Activity-log reads. Entries are kept newest-first; writing happens on the
//! mutation paths via [`crate::NetworkStore::log_activity`].

use rede_core::entities::ActivityLogEntry;

use crate::store::NetworkStore;

impl NetworkStore {
    /// The full activity log, newest first.
    #[must_use]
    pub fn activity_log(&self) -> &[ActivityLogEntry] {
        &self.activity_log
    }

    /// The `n` most recent entries (the dashboard widget).
    #[must_use]
    pub fn recent_activity(&self, n: usize) -> &[ActivityLogEntry] {
        &self.activity_log[..n.min(self.activity_log.len())]
    }

    /// Entries scoped to one partner, newest first.
    #[must_use]
    pub fn partner_activity(&self, partner_id: &str) -> Vec<&ActivityLogEntry> {
        self.activity_log
            .iter()
            .filter(|e| e.partner_id.as_deref() == Some(partner_id))
            .collect()
    }

    /// Entries scoped to one professional, newest first.
    #[must_use]
    pub fn professional_activity(&self, professional_id: &str) -> Vec<&ActivityLogEntry> {
        self.activity_log
            .iter()
            .filter(|e| e.professional_id.as_deref() == Some(professional_id))
            .collect()
    }
}
