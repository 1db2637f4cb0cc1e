//! Intent Classifier Port - Interface for the natural-language classifier.
//!
//! The classifier is opaque: it receives the user's text for a session and
//! answers with a [`QueryResult`] naming the recognized intent, the raw
//! query text, extracted parameters and the session's live context markers.
//!
//! [`QueryResult`] uses the classifier's JSON field names so the same type
//! decodes both `detectIntent` responses and fulfillment callbacks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::SessionPath;

/// Port for classifying a user utterance.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify `text` within the given session.
    async fn detect_intent(
        &self,
        session: &SessionPath,
        text: &str,
    ) -> Result<QueryResult, ClassifierError>;

    /// Classifier project the sessions belong to.
    fn project_id(&self) -> &str;
}

/// Result of classifying one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Raw user text as received by the classifier.
    #[serde(default)]
    pub query_text: String,

    /// Recognized intent, absent when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentRef>,

    /// Extracted parameters, plain JSON or protobuf `Struct` form.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub parameters: Value,

    /// Context markers alive for the session after this utterance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_contexts: Vec<OutputContext>,
}

impl QueryResult {
    /// Display name of the recognized intent.
    pub fn intent_name(&self) -> &str {
        self.intent
            .as_ref()
            .map(|i| i.display_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("UnknownIntent")
    }

    /// Context whose qualified name ends with `/contexts/{short_name}`.
    pub fn find_context(&self, short_name: &str) -> Option<&OutputContext> {
        self.output_contexts
            .iter()
            .find(|ctx| ctx.short_name().eq_ignore_ascii_case(short_name))
    }
}

/// Reference to a classifier intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    #[serde(default)]
    pub display_name: String,

    /// Fully qualified intent resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A context marker in classifier wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputContext {
    /// `projects/.../sessions/{session}/contexts/{short_name}`
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
}

impl OutputContext {
    /// Last path segment of the qualified name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Errors from the classifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifierError {
    /// Request did not complete in time.
    #[error("classifier timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Access token rejected.
    #[error("classifier authentication failed")]
    AuthenticationFailed,

    /// Classifier answered with a non-success status.
    #[error("classifier returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClassifierError {
    pub fn network(message: impl Into<String>) -> Self {
        ClassifierError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ClassifierError::Parse(message.into())
    }
}
