//! Print-view frame: the header and footer wrapped around a printed report.

use chrono::{DateTime, Utc};

use rede_config::BrandingConfig;

/// Everything the print layout needs besides the report body itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
    /// Branding logo, when one is saved.
    pub logo_data_url: Option<String>,
    /// Issue date shown in the header, `dd/mm/yyyy`.
    pub issue_date: String,
    /// Footer text (the saved one, or the stock disclaimer).
    pub footer: String,
}

impl PrintDocument {
    /// Assemble the frame from the saved branding and an issue instant.
    #[must_use]
    pub fn assemble(branding: &BrandingConfig, issued_at: DateTime<Utc>) -> Self {
        Self {
            logo_data_url: branding.logo_data_url.clone(),
            issue_date: issued_at.format("%d/%m/%Y").to_string(),
            footer: branding.effective_footer().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rede_config::DEFAULT_REPORT_FOOTER;

    #[test]
    fn default_branding_uses_stock_disclaimer() {
        let doc = PrintDocument::assemble(
            &BrandingConfig::default(),
            Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        );
        assert_eq!(doc.logo_data_url, None);
        assert_eq!(doc.issue_date, "01/08/2026");
        assert_eq!(doc.footer, DEFAULT_REPORT_FOOTER);
    }

    #[test]
    fn saved_branding_flows_through() {
        let branding = BrandingConfig {
            logo_data_url: Some("data:image/png;base64,AAAA".to_string()),
            report_footer: "Rede Exemplo LTDA".to_string(),
            ..Default::default()
        };
        let doc = PrintDocument::assemble(
            &branding,
            Utc.with_ymd_and_hms(2026, 12, 25, 0, 0, 0).unwrap(),
        );
        assert_eq!(doc.logo_data_url.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(doc.issue_date, "25/12/2026");
        assert_eq!(doc.footer, "Rede Exemplo LTDA");
    }
}
