//! HTTP routes for the WhatsApp channel.

use axum::{routing::post, Router};

use super::handlers::{receive_message, WhatsAppHandlers};

/// Creates the WhatsApp router.
///
/// Routes:
/// - `POST /twilio-webhook` - Inbound message, answered with TwiML
pub fn whatsapp_routes(handlers: WhatsAppHandlers) -> Router {
    Router::new()
        .route("/twilio-webhook", post(receive_message))
        .with_state(handlers)
}
