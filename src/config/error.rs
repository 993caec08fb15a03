//! Configuration error types

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required configuration value: {0}")]
    MissingRequired(&'static str),

    #[error("Database URL must use the sqlite scheme")]
    InvalidDatabaseUrl,

    #[error("Database pool size must be between 1 and 32")]
    InvalidPoolSize,
}
