//! HTTP DTOs for the classifier fulfillment webhook.
//!
//! Field names follow the classifier's JSON (camelCase).

use serde::{Deserialize, Serialize};

use crate::domain::conversation::Fulfillment;
use crate::domain::foundation::SessionPath;
use crate::ports::{OutputContext, QueryResult};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Fulfillment callback body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Qualified session path, `projects/{p}/agent/sessions/{s}`.
    #[serde(default)]
    pub session: String,

    pub query_result: QueryResult,

    /// Sender's phone number, present when relayed from WhatsApp.
    #[serde(default)]
    pub phone_number: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Fulfillment reply body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_contexts: Vec<OutputContext>,
}

impl WebhookResponse {
    /// Qualifies each marker under `session` and attaches draft parameters.
    pub fn from_fulfillment(session: &SessionPath, fulfillment: Fulfillment) -> Self {
        let output_contexts = fulfillment
            .markers
            .into_iter()
            .map(|marker| OutputContext {
                name: session.context_name(marker.name.as_str()),
                lifespan_count: Some(marker.lifespan),
                parameters: marker
                    .draft
                    .map(|draft| draft.to_slots().to_json())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            fulfillment_text: fulfillment.text,
            output_contexts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{ContextMarker, ContextName, VoterSearchDraft};
    use serde_json::json;

    fn session() -> SessionPath {
        SessionPath::from_raw("projects/p/agent/sessions/s")
    }

    #[test]
    fn request_deserializes_with_phone_number() {
        let req: WebhookRequest = serde_json::from_value(json!({
            "session": "projects/p/agent/sessions/s",
            "queryResult": { "queryText": "1", "intent": { "displayName": "MenuSelectionIntent" } },
            "phoneNumber": "+919876543210"
        }))
        .unwrap();
        assert_eq!(req.session, "projects/p/agent/sessions/s");
        assert_eq!(req.query_result.intent_name(), "MenuSelectionIntent");
        assert_eq!(req.phone_number.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn request_without_session_uses_empty_path() {
        let req: WebhookRequest =
            serde_json::from_value(json!({ "queryResult": { "queryText": "hi" } })).unwrap();
        assert!(req.session.is_empty());
        assert!(req.phone_number.is_none());
    }

    #[test]
    fn response_omits_contexts_when_none() {
        let body = WebhookResponse::from_fulfillment(&session(), Fulfillment::text("ok"));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "fulfillmentText": "ok" })
        );
    }

    #[test]
    fn response_qualifies_markers_and_carries_draft() {
        let draft = VoterSearchDraft::with_name("Asha");
        let body = WebhookResponse::from_fulfillment(
            &session(),
            Fulfillment::with_markers(
                "prompt",
                vec![
                    ContextMarker::keep(ContextName::AwaitingDob, 3),
                    ContextMarker::clear(ContextName::AwaitingFullName),
                    ContextMarker::carrying(draft, 6),
                ],
            ),
        );

        let value = serde_json::to_value(body).unwrap();
        let contexts = value["outputContexts"].as_array().unwrap();
        assert_eq!(contexts.len(), 3);
        assert_eq!(
            contexts[0],
            json!({ "name": "projects/p/agent/sessions/s/contexts/awaiting_dob", "lifespanCount": 3 })
        );
        assert_eq!(contexts[1]["lifespanCount"], 0);
        assert_eq!(
            contexts[2]["name"],
            "projects/p/agent/sessions/s/contexts/temp_voterdata"
        );
        assert_eq!(contexts[2]["parameters"]["full_name"], "Asha");
    }
}
