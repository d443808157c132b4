use thiserror::Error;

use crate::transport::TransportError;

/// Unified error type for the discovery agent.
///
/// Only genuine model-transport failures abort an `ask` invocation; tool
/// failures are converted to tool outcomes before they ever reach this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tool-call round limit exceeded ({limit} rounds)")]
    ToolRoundsExceeded { limit: usize },
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }
}
