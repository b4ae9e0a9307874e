//! CSV serialization of partner reports.
//!
//! Fixed seven-column layout, every field double-quote wrapped with internal
//! quotes doubled, rows newline-joined. The output is handed to the browser
//! as a file download, so the file name lives here too.

use rede_query::PartnerReportRow;

use crate::error::ExportError;

/// Download name offered for the exported file.
pub const CSV_FILE_NAME: &str = "relatorio_parceiros.csv";

const HEADERS: [&str; 7] = [
    "Nome",
    "Categoria",
    "Tipo",
    "CNPJ",
    "Endereço",
    "Contato",
    "Status",
];

/// Serialize a generated partner report. Rejects an empty report so the
/// caller can tell the user to generate one first.
pub fn partner_report_csv(rows: &[PartnerReportRow]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyReport);
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADERS.join(","));
    for row in rows {
        let p = &row.partner;
        let fields = [
            quote(&p.name),
            quote(p.category.as_str()),
            quote(&p.kind),
            quote(&p.cnpj),
            quote(&p.address),
            quote(&p.contact),
            quote(p.status.as_str()),
        ];
        lines.push(fields.join(","));
    }
    tracing::debug!(rows = rows.len(), "partner report serialized to CSV");
    Ok(lines.join("\n"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
