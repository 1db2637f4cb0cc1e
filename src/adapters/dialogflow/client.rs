//! Dialogflow ES client - Implementation of IntentClassifier over REST.
//!
//! # Configuration
//!
//! ```ignore
//! let config = DialogflowConfig::new("rough-igui", access_token)
//!     .with_language_code("en")
//!     .with_timeout(Duration::from_secs(15));
//!
//! let client = DialogflowClient::new(config)?;
//! ```
//!
//! Each call posts one text query to
//! `{base_url}/projects/{project}/agent/sessions/{session}:detectIntent`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::SessionPath;
use crate::ports::{ClassifierError, IntentClassifier, QueryResult};

/// Default REST endpoint for Dialogflow ES.
pub const DEFAULT_BASE_URL: &str = "https://dialogflow.googleapis.com/v2";

/// Configuration for the Dialogflow client.
#[derive(Debug, Clone)]
pub struct DialogflowConfig {
    /// Agent project id.
    pub project_id: String,
    /// OAuth access token for the agent's service account.
    access_token: Secret<String>,
    /// Language of incoming text (default: "en").
    pub language_code: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DialogflowConfig {
    /// Creates a configuration with default endpoint, language and timeout.
    pub fn new(project_id: impl Into<String>, access_token: Secret<String>) -> Self {
        Self {
            project_id: project_id.into(),
            access_token,
            language_code: "en".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the language code.
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Dialogflow ES intent classifier.
pub struct DialogflowClient {
    config: DialogflowConfig,
    client: Client,
}

impl DialogflowClient {
    /// Creates a client; fails only if the TLS backend cannot initialize.
    pub fn new(config: DialogflowConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifierError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the detectIntent endpoint URL for a session.
    fn detect_intent_url(&self, session: &SessionPath) -> String {
        format!(
            "{}/{}:detectIntent",
            self.config.base_url.trim_end_matches('/'),
            session
        )
    }

    fn to_request<'a>(&'a self, text: &'a str) -> DetectIntentRequest<'a> {
        DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text,
                    language_code: &self.config.language_code,
                },
            },
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClassifierError {
        if e.is_timeout() {
            ClassifierError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            ClassifierError::network(format!("Connection failed: {}", e))
        } else {
            ClassifierError::network(e.to_string())
        }
    }

    /// Passes successful responses through and maps the rest to errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ClassifierError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), error_body))
    }
}

fn status_error(status: u16, body: String) -> ClassifierError {
    match status {
        401 | 403 => ClassifierError::AuthenticationFailed,
        _ => ClassifierError::Api {
            status,
            message: body,
        },
    }
}

#[async_trait]
impl IntentClassifier for DialogflowClient {
    async fn detect_intent(
        &self,
        session: &SessionPath,
        text: &str,
    ) -> Result<QueryResult, ClassifierError> {
        tracing::debug!(session = %session, "Sending detectIntent request");

        let response = self
            .client
            .post(self.detect_intent_url(session))
            .bearer_auth(self.config.access_token())
            .json(&self.to_request(text))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let response = self.handle_response_status(response).await?;

        let body: DetectIntentResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::parse(e.to_string()))?;

        tracing::debug!(
            session = %session,
            intent = body.query_result.intent_name(),
            "detectIntent response received"
        );

        Ok(body.query_result)
    }

    fn project_id(&self) -> &str {
        &self.config.project_id
    }
}

// === Wire types ===

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentRequest<'a> {
    query_input: QueryInput<'a>,
}

#[derive(Debug, Serialize)]
struct QueryInput<'a> {
    text: TextInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextInput<'a> {
    text: &'a str,
    language_code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentResponse {
    #[serde(default)]
    query_result: QueryResult,
}
