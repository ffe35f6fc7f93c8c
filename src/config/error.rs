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
    #[error("Log level directive cannot be empty")]
    EmptyLogLevel,

    #[error("Report precision {0} exceeds maximum allowed ({max})", max = super::report::MAX_PRECISION)]
    PrecisionTooLarge(usize),
}
