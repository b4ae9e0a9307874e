use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Exporting requires a generated, non-empty partner report.
    #[error("there is no report data to export")]
    EmptyReport,
}
