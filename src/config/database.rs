//! Database configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// SQLite database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://mindtide.db`
    pub url: String,

    /// Maximum pool connections. SQLite tolerates few writers, so this
    /// stays small.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 || self.max_connections > 32 {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_missing_url() {
        let config = DatabaseConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_sqlite_url() {
        let config = DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_pool() {
        let config = DatabaseConfig {
            url: "sqlite://mindtide.db".to_string(),
            max_connections: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_sqlite_url() {
        let config = DatabaseConfig {
            url: "sqlite://mindtide.db".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_accepts_in_memory_url() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
