//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Reading or writing a config file failed.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A saved config file could not be parsed.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the config for saving failed.
    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
