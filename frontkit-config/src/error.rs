// Error types for configuration resolution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resolved configuration failed its schema's `anyOf` rules.
    #[error("{component}: {message}")]
    Validation { component: String, message: String },

    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn validation(component: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            component: component.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
