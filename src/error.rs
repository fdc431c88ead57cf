//! Error types for the apipage CLI

use thiserror::Error;

/// Result type alias for apipage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors raised while loading endpoint records
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Endpoint record file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse endpoint record: {0}")]
    ParseError(String),

    #[error("Invalid endpoint record {endpoint}: {reason}")]
    Invalid { endpoint: String, reason: String },

    #[error("No endpoint records found in {0}")]
    Empty(String),

    #[error("File holds {count} endpoint records. Use `apipage build` to render a collection.")]
    NotSingle { count: usize },
}

impl From<serde_yaml::Error> for RecordError {
    fn from(err: serde_yaml::Error) -> Self {
        RecordError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::ParseError(err.to_string())
    }
}

/// Errors raised while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Security scheme `{0}` not found in endpoint security requirements")]
    MissingSecurityScheme(String),

    #[error("Request body schema is not valid JSON: {0}")]
    InvalidBodySchema(String),

    #[error("Response index {index} out of range ({len} responses)")]
    ResponseOutOfRange { index: usize, len: usize },

    #[error("Tab {tab} is not available for response {response}")]
    TabUnavailable { tab: String, response: usize },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
