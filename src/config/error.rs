//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Request timeout ({request_secs}s) must exceed the AI timeout ({ai_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, ai_secs: u64 },

    #[error("Invalid AI base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Model name must not be empty: {0}")]
    EmptyModel(&'static str),

    #[error("Debate temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Maximum scenario length must be between 1 and {max}")]
    InvalidMaxLength { max: usize },

    #[error("Preferences path must not be empty")]
    EmptyPreferencesPath,

    #[error("Session idle timeout and session cap must be positive")]
    InvalidSessionLimits,
}
