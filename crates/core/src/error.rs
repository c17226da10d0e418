//! Error types for loading tuning configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or validating an [`ArcadeConfig`](crate::config::ArcadeConfig).
///
/// The simulations themselves have no error paths; only configuration can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
