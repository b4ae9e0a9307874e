use thiserror::Error;

/// Validation failures raised before a report is generated. The previous
/// report (if any) is left untouched when one of these is returned.
#[derive(Debug, Error)]
pub enum ReportError {
    /// "Other areas" partner reports require a category.
    #[error("a category must be selected for this report")]
    MissingCategory,
    /// Exam reports require a non-empty search term.
    #[error("a search term is required for an exam report")]
    MissingSearchTerm,
}
