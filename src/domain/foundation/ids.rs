//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Identifier of a conversation with the classifier.
///
/// For the WhatsApp channel this is the sender address (`whatsapp:+91...`);
/// callers without an address get a random UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a SessionId from a channel address, rejecting blank input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates a new random SessionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Uses the sender address when present, otherwise a random id.
    pub fn from_sender_or_generate(sender: Option<&str>) -> Self {
        sender
            .and_then(|s| Self::new(s).ok())
            .unwrap_or_else(Self::generate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully qualified classifier session path.
///
/// Format: `projects/{project_id}/agent/sessions/{session_id}`. Context
/// markers are qualified as `{session_path}/contexts/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionPath(String);

impl SessionPath {
    /// Builds the path for a session inside a classifier project.
    pub fn for_session(project_id: &str, session_id: &SessionId) -> Self {
        Self(format!(
            "projects/{}/agent/sessions/{}",
            project_id,
            session_id.as_str()
        ))
    }

    /// Wraps a path received verbatim from the classifier.
    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Qualifies a short context name with this session.
    pub fn context_name(&self, short_name: &str) -> String {
        format!("{}/contexts/{}", self.0, short_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_trims_sender_address() {
        let id = SessionId::new("  whatsapp:+919876543210 ").unwrap();
        assert_eq!(id.as_str(), "whatsapp:+919876543210");
    }

    #[test]
    fn session_id_rejects_blank() {
        assert!(SessionId::new("   ").is_err());
    }

    #[test]
    fn session_id_falls_back_to_uuid() {
        let id = SessionId::from_sender_or_generate(None);
        assert!(Uuid::parse_str(id.as_str()).is_ok());

        let id = SessionId::from_sender_or_generate(Some(""));
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn session_path_qualifies_context_names() {
        let session = SessionId::new("whatsapp:+911234").unwrap();
        let path = SessionPath::for_session("rough-igui", &session);
        assert_eq!(
            path.as_str(),
            "projects/rough-igui/agent/sessions/whatsapp:+911234"
        );
        assert_eq!(
            path.context_name("main-menu"),
            "projects/rough-igui/agent/sessions/whatsapp:+911234/contexts/main-menu"
        );
    }
}
