//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or accept an options file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading options file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// A single rejected settings value.
///
/// Messages match what the settings screen shows next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Please specify the Site ID")]
    MissingSiteId,

    #[error("Your Parse.ly Site ID looks incorrect, it should look like \"example.com\".")]
    MalformedSiteId(String),

    #[error("Value passed for {key} must be either \"true\" or \"false\".")]
    NotBoolean { key: &'static str, value: String },

    #[error("Unknown option `{0}`")]
    Unknown(String),
}

impl OptionError {
    /// Option key the error is reported against.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingSiteId | Self::MalformedSiteId(_) => "apikey",
            Self::NotBoolean { key, .. } => key,
            Self::Unknown(key) => key,
        }
    }
}
