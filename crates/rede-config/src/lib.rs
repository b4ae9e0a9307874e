//! # rede-config
//!
//! Layered configuration loading for RedePro using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REDEPRO_*` prefix, `__` as separator)
//! 2. Project-level `.redepro/config.toml`
//! 3. User-level `~/.config/redepro/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `REDEPRO_BRANDING__REPORT_FOOTER` -> `branding.report_footer`
//! and so on; `__` separates nested sections.
//!
//! Saving goes through [`RedeConfig::save_to`], which writes the user-level
//! TOML file; this replaces the browser-storage persistence of the original
//! dashboard.

mod branding;
mod error;

pub use branding::{BrandingConfig, DEFAULT_REPORT_FOOTER, ReportLayout, ThemeColor};
pub use error::ConfigError;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedeConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl RedeConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables). Does not read `.env`; use [`Self::load_with_dotenv`] for
    /// that.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain. Public so tests can layer extra
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".redepro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("REDEPRO_").split("__"))
    }

    /// Read a saved config file directly, without layering.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Persist the full config as TOML, creating parent directories as
    /// needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(self)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Persist to the user-level config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::global_config_path() {
            Some(path) => self.save_to(&path),
            None => Err(ConfigError::Io(std::io::Error::other(
                "no user config directory available",
            ))),
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("redepro").join("config.toml"))
    }
}
