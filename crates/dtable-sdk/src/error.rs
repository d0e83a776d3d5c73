//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid decision table
    #[error("Decision table error: {0}")]
    TableError(#[from] dtable_core::CoreError),

    /// Evaluation error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] dtable_runtime::RuntimeError),

    /// No table registered under this name
    #[error("Unknown decision table: {0}")]
    UnknownTable(String),

    /// YAML configuration could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
