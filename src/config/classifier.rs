//! Intent classifier configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Dialogflow agent configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Agent project id
    pub project_id: String,

    /// OAuth bearer token for the agent's service account
    pub access_token: Secret<String>,

    /// Language code for text queries
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// REST endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CLASSIFIER__PROJECT_ID"));
        }
        if self.access_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("CLASSIFIER__ACCESS_TOKEN"));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidClassifierUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            access_token: Secret::new(String::new()),
            language_code: default_language_code(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_language_code() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    crate::adapters::dialogflow::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    15
}
