//! HTTP handlers for the Twilio WhatsApp webhook.

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use http::header;

use crate::adapters::twilio::{MessagingResponse, TWIML_CONTENT_TYPE};
use crate::application::handlers::messaging::{RelayMessageCommand, RelayMessageHandler};

use super::dto::InboundMessageForm;

#[derive(Clone)]
pub struct WhatsAppHandlers {
    relay_handler: Arc<RelayMessageHandler>,
}

impl WhatsAppHandlers {
    pub fn new(relay_handler: Arc<RelayMessageHandler>) -> Self {
        Self { relay_handler }
    }
}

/// POST /twilio-webhook - Inbound WhatsApp message
///
/// Replies with a single-message TwiML document.
pub async fn receive_message(
    State(handlers): State<WhatsAppHandlers>,
    Form(form): Form<InboundMessageForm>,
) -> impl IntoResponse {
    let cmd = RelayMessageCommand {
        body: form.body,
        from: form.from,
    };

    let result = handlers.relay_handler.handle(cmd).await;
    let twiml = MessagingResponse::new().message(result.reply).to_xml();

    ([(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)], twiml)
}
