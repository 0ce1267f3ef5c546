//! Error types for site configuration.

use thiserror::Error;

/// Errors raised while loading or checking a [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is unusable.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted path of the offending key
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
