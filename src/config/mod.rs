//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VOTE_ASSIST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vote_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod classifier;
mod database;
mod error;
mod server;

pub use classifier::ClassifierConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (electoral roll)
    pub database: DatabaseConfig,

    /// Intent classifier configuration (Dialogflow agent)
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VOTE_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VOTE_ASSIST__SERVER__PORT=3030` -> `server.port = 3030`
    /// - `VOTE_ASSIST__DATABASE__URL=...` -> `database.url = ...`
    /// - `VOTE_ASSIST__CLASSIFIER__PROJECT_ID=...` -> `classifier.project_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VOTE_ASSIST")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.classifier.validate()?;
        self.validate_timeout_budget()
    }

    /// A relayed message spends up to the classifier timeout before the
    /// lookups start; both must finish before the request timeout fires, or
    /// the caller gets a bare 408 instead of an apology reply.
    fn validate_timeout_budget(&self) -> Result<(), ValidationError> {
        let classifier_secs = self.classifier.timeout_secs;
        let lookup_secs = self.database.lookup_timeout_secs;
        let request_secs = self.server.request_timeout_secs;
        if classifier_secs + lookup_secs >= request_secs {
            return Err(ValidationError::TimeoutBudgetExceeded {
                classifier_secs,
                lookup_secs,
                request_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("VOTE_ASSIST__DATABASE__URL", "postgresql://test@localhost/voters");
        env::set_var("VOTE_ASSIST__CLASSIFIER__PROJECT_ID", "rough-igui");
        env::set_var("VOTE_ASSIST__CLASSIFIER__ACCESS_TOKEN", "ya29.token");
    }

    fn clear_env() {
        env::remove_var("VOTE_ASSIST__DATABASE__URL");
        env::remove_var("VOTE_ASSIST__CLASSIFIER__PROJECT_ID");
        env::remove_var("VOTE_ASSIST__CLASSIFIER__ACCESS_TOKEN");
        env::remove_var("VOTE_ASSIST__SERVER__PORT");
        env::remove_var("VOTE_ASSIST__SERVER__ENVIRONMENT");
        env::remove_var("VOTE_ASSIST__DATABASE__LOOKUP_TIMEOUT_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/voters");
        assert_eq!(config.classifier.project_id, "rough-igui");
        assert_eq!(config.classifier.access_token.expose_secret(), "ya29.token");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.classifier.language_code, "en");
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOTE_ASSIST__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOTE_ASSIST__SERVER__PORT", "8088");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 8088);
    }

    #[test]
    fn test_default_timeouts_leave_room_for_an_apology() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(
            config.classifier.timeout() + config.database.lookup_timeout()
                < config.server.request_timeout()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_timeout_reaching_request_timeout_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOTE_ASSIST__DATABASE__LOOKUP_TIMEOUT_SECS", "15");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::TimeoutBudgetExceeded {
                classifier_secs: 15,
                lookup_secs: 15,
                request_secs: 30
            })
        ));
    }

    #[test]
    fn test_missing_classifier_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VOTE_ASSIST__DATABASE__URL", "postgresql://test@localhost/voters");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }
}
