//! # rede-query
//!
//! Read-side queries over a [`rede_store::NetworkStore`]: affiliation joins,
//! the report filter engine, dashboard aggregates, and date-range analytics.
//!
//! Everything here is a pure function of the store; nothing mutates.

pub mod affiliation;
pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod reports;

pub use affiliation::{Affiliation, LinkedProfessional, partner_affiliations, professional_affiliations};
pub use analytics::{AnalysisInterval, Period, PeriodSelection, PeriodSummary};
pub use dashboard::DashboardSummary;
pub use error::ReportError;
pub use reports::{
    ExamReportQuery, ExamReportRow, GeneratedReport, HealthReportFilter, OtherReportFilter,
    PartnerReportFilter, PartnerReportRow, ReportProfessional, ReportState, StatusFilter,
    exam_report, partner_report,
};
