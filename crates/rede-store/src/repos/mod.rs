//! Repository methods, grouped per entity, all implemented on
//! [`crate::NetworkStore`].

mod activity;
mod exam;
mod link;
mod partner;
mod professional;

pub use exam::ExamWithProfessional;
