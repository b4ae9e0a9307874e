//! # rede-export
//!
//! Outbound report surfaces: CSV serialization of partner reports and the
//! print-view frame (branding header and footer around the report body).

mod csv;
mod error;
mod print;

pub use csv::{CSV_FILE_NAME, partner_report_csv};
pub use error::ExportError;
pub use print::PrintDocument;
