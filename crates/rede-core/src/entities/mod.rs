//! Entity structs for the RedePro partner network domain.
//!
//! All structs are plain records: no behavior beyond derives. Mutation rules
//! live in `rede-store`, queries in `rede-query`.

mod activity;
mod exam;
mod link;
mod partner;
mod professional;

pub use activity::ActivityLogEntry;
pub use exam::Exam;
pub use link::ProfessionalLink;
pub use partner::Partner;
pub use professional::Professional;
