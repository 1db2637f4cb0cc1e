//! HTTP handlers for the classifier fulfillment webhook.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::handlers::fulfillment::{FulfillIntentCommand, FulfillIntentHandler};
use crate::domain::foundation::SessionPath;

use super::dto::{WebhookRequest, WebhookResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FulfillmentHandlers {
    fulfill_handler: Arc<FulfillIntentHandler>,
}

impl FulfillmentHandlers {
    pub fn new(fulfill_handler: Arc<FulfillIntentHandler>) -> Self {
        Self { fulfill_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST / - Classifier fulfillment callback
///
/// Always answers 200; lookup failures are folded into the reply text.
pub async fn fulfill_intent(
    State(handlers): State<FulfillmentHandlers>,
    Json(req): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
    let session = SessionPath::from_raw(req.session);
    let cmd = FulfillIntentCommand {
        session: session.clone(),
        query_result: req.query_result,
        phone_number: req.phone_number,
    };

    let fulfillment = handlers.fulfill_handler.handle(cmd).await;
    Json(WebhookResponse::from_fulfillment(&session, fulfillment))
}

/// GET / - Liveness probe
pub async fn health_check() -> &'static str {
    "VoteAssist webhook server is running."
}
