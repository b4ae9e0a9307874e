//! # rede-store
//!
//! In-memory store for RedePro state: partners (with their exams and
//! affiliation links), professionals, and the activity log.
//!
//! There is no persistence layer: a fresh store is rebuilt from seed data,
//! exactly like the original dashboard resets on reload. All mutations are
//! synchronous, single-writer, and each appends one activity-log entry.
//!
//! Repository methods are grouped per entity under `repos`, all implemented
//! on [`NetworkStore`].

pub mod inputs;
pub mod repos;
pub mod seed;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use inputs::{ExamDraft, LinkTerms, PartnerDraft, PartnerUpdate, ProfessionalDraft, ProfessionalUpdate};
pub use repos::ExamWithProfessional;
pub use seed::SeedData;
pub use store::NetworkStore;
