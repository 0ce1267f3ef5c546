//! Error types for the browser runtime.

use sitekit_core::{ConfigError, SubmitOutcome};
use thiserror::Error;

/// Errors that prevent a site from mounting at all.
///
/// Missing page elements are not errors; the affected behaviour is skipped.
#[derive(Debug, Error)]
pub enum MountError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The supplied configuration was rejected.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from a contact form submission request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request could not be built (bad URL, unavailable API).
    #[error("could not build request: {0}")]
    Request(String),

    /// The request was sent but never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

impl From<SubmitError> for SubmitOutcome {
    /// Every submission error means the message did not reach the server.
    fn from(err: SubmitError) -> Self {
        Self::NetworkError(err.to_string())
    }
}
