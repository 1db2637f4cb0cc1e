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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid classifier base URL")]
    InvalidClassifierUrl,

    #[error("Pool acquire timeout ({acquire_secs}s) must not exceed the lookup timeout ({lookup_secs}s)")]
    AcquireExceedsLookupTimeout { acquire_secs: u64, lookup_secs: u64 },

    #[error(
        "Classifier timeout ({classifier_secs}s) plus lookup timeout ({lookup_secs}s) \
         must be shorter than the request timeout ({request_secs}s)"
    )]
    TimeoutBudgetExceeded {
        classifier_secs: u64,
        lookup_secs: u64,
        request_secs: u64,
    },
}
