use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Validation error: {0}")]
    #[diagnostic(code(shiftly::validation))]
    Validation(String),

    #[error("Shift not found: {0}")]
    #[diagnostic(code(shiftly::not_found))]
    NotFound(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(shiftly::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(shiftly::config))]
    Config(String),

    #[error("Schedule error: {0}")]
    #[diagnostic(code(shiftly::schedule))]
    Schedule(String),

    #[error(transparent)]
    #[diagnostic(code(shiftly::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(shiftly::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(shiftly::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ScheduleResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create validation errors
pub fn validation_error(message: &str) -> Error {
    Error::Validation(message.to_string())
}

/// Helper to create not-found errors for shift ids
pub fn not_found_error(id: &str) -> Error {
    Error::NotFound(id.to_string())
}

/// Helper to create schedule errors
pub fn schedule_error(message: &str) -> Error {
    Error::Schedule(message.to_string())
}
