//! RelayMessageHandler - Carries an inbound WhatsApp message through the
//! classifier and fulfillment, returning the reply text for the channel.

use std::sync::Arc;

use crate::application::handlers::fulfillment::{FulfillIntentCommand, FulfillIntentHandler};
use crate::domain::foundation::{SessionId, SessionPath};
use crate::ports::IntentClassifier;

/// Reply when the classifier cannot be reached.
pub const CLASSIFIER_UNAVAILABLE: &str =
    "There was a problem understanding you. Please try again later.";

/// Reply when fulfillment produced no text.
pub const EMPTY_REPLY: &str = "Sorry, I didn't understand that.";

const WHATSAPP_PREFIX: &str = "whatsapp:";

/// Command carrying one inbound channel message.
#[derive(Debug, Clone)]
pub struct RelayMessageCommand {
    pub body: String,
    /// Channel sender address, e.g. `whatsapp:+919876543210`.
    pub from: Option<String>,
}

/// Result of relaying a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayMessageResult {
    pub session_id: SessionId,
    pub reply: String,
}

/// Handler for inbound channel messages.
pub struct RelayMessageHandler {
    classifier: Arc<dyn IntentClassifier>,
    fulfillment: Arc<FulfillIntentHandler>,
}

impl RelayMessageHandler {
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        fulfillment: Arc<FulfillIntentHandler>,
    ) -> Self {
        Self {
            classifier,
            fulfillment,
        }
    }

    /// Never fails: classifier errors become an apology reply.
    pub async fn handle(&self, cmd: RelayMessageCommand) -> RelayMessageResult {
        let session_id = SessionId::from_sender_or_generate(cmd.from.as_deref());
        let session = SessionPath::for_session(self.classifier.project_id(), &session_id);
        let phone_number = cmd.from.as_deref().and_then(sender_phone_number);

        let reply = match self.classifier.detect_intent(&session, &cmd.body).await {
            Ok(query_result) => {
                let fulfillment = self
                    .fulfillment
                    .handle(FulfillIntentCommand {
                        session,
                        query_result,
                        phone_number,
                    })
                    .await;
                if fulfillment.text.trim().is_empty() {
                    EMPTY_REPLY.to_string()
                } else {
                    fulfillment.text
                }
            }
            Err(e) => {
                tracing::error!(session = %session_id, error = %e, "Classifier request failed");
                CLASSIFIER_UNAVAILABLE.to_string()
            }
        };

        tracing::info!(session = %session_id, reply_len = reply.len(), "Reply after webhook processing");

        RelayMessageResult { session_id, reply }
    }
}

/// Phone number portion of a WhatsApp sender address.
fn sender_phone_number(from: &str) -> Option<String> {
    let from = from.trim();
    let phone = from.strip_prefix(WHATSAPP_PREFIX).unwrap_or(from).trim();
    (!phone.is_empty()).then(|| phone.to_string())
}
