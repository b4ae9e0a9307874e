//! White-label branding settings: logo, report footer, report layout, and
//! theme color.

use serde::{Deserialize, Serialize};

/// Fallback footer printed on reports when no custom footer is saved.
pub const DEFAULT_REPORT_FOOTER: &str =
    "Os valores podem sofrer alteração, entre em contato diretamente com o parceiro.";

/// How report cards are laid out on screen and in print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    #[default]
    Grid,
    List,
    Columns,
}

impl ReportLayout {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grade Compacta",
            Self::List => "Lista Vertical",
            Self::Columns => "Colunas Duplas",
        }
    }
}

/// The five preset theme colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    Verde,
    #[default]
    PadraoAzul,
    Roxo,
    Laranja,
    Cinza,
}

impl ThemeColor {
    pub const ALL: [Self; 5] = [
        Self::Verde,
        Self::PadraoAzul,
        Self::Roxo,
        Self::Laranja,
        Self::Cinza,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verde => "Verde",
            Self::PadraoAzul => "Padrão (Azul)",
            Self::Roxo => "Roxo",
            Self::Laranja => "Laranja",
            Self::Cinza => "Cinza",
        }
    }

    /// The HSL triple applied to the `--primary` design token.
    #[must_use]
    pub const fn primary_hsl(self) -> &'static str {
        match self {
            Self::Verde => "142.1 76.2% 36.3%",
            Self::PadraoAzul => "221.2 83.2% 53.3%",
            Self::Roxo => "262.1 83.3% 57.8%",
            Self::Laranja => "24.6 95% 53.1%",
            Self::Cinza => "215.3 19.3% 34.5%",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    /// Custom logo as a data URL; `None` shows the built-in placeholder.
    #[serde(default)]
    pub logo_data_url: Option<String>,

    /// Custom report footer. Empty means [`DEFAULT_REPORT_FOOTER`] is used.
    #[serde(default)]
    pub report_footer: String,

    #[serde(default)]
    pub report_layout: ReportLayout,

    #[serde(default)]
    pub theme_color: ThemeColor,
}

impl BrandingConfig {
    /// The footer text reports should actually print.
    #[must_use]
    pub fn effective_footer(&self) -> &str {
        if self.report_footer.trim().is_empty() {
            DEFAULT_REPORT_FOOTER
        } else {
            &self.report_footer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_stock_appearance() {
        let branding = BrandingConfig::default();
        assert_eq!(branding.logo_data_url, None);
        assert_eq!(branding.report_layout, ReportLayout::Grid);
        assert_eq!(branding.theme_color, ThemeColor::PadraoAzul);
        assert_eq!(branding.effective_footer(), DEFAULT_REPORT_FOOTER);
    }

    #[test]
    fn custom_footer_wins_when_non_blank() {
        let branding = BrandingConfig {
            report_footer: "Rede Exemplo LTDA".to_string(),
            ..Default::default()
        };
        assert_eq!(branding.effective_footer(), "Rede Exemplo LTDA");

        let blank = BrandingConfig {
            report_footer: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(blank.effective_footer(), DEFAULT_REPORT_FOOTER);
    }

    #[test]
    fn every_theme_color_has_an_hsl_triple() {
        for color in ThemeColor::ALL {
            assert!(color.primary_hsl().contains('%'), "{}", color.label());
        }
    }
}
