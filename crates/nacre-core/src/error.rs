use thiserror::Error;

/// Protocol-wide error types for the Nacre Protocol.
#[derive(Debug, Error)]
pub enum NacreError {
    /// Configuration integrity error (supply constants, distribution table
    /// authoring). Fatal at bootstrap: the host must not start serving with
    /// a misconfigured supply.
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NacreError {
    fn from(e: serde_json::Error) -> Self {
        NacreError::Serialization(e.to_string())
    }
}
