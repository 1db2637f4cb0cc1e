//! HTTP adapters - Webhook endpoints.
//!
//! - `fulfillment` - Classifier fulfillment callback and liveness text at `/`
//! - `whatsapp` - Twilio inbound messages at `/twilio-webhook`

pub mod fulfillment;
pub mod whatsapp;

mod router;

pub use fulfillment::{fulfillment_routes, FulfillmentHandlers, WebhookRequest, WebhookResponse};
pub use router::{app_router, AppState};
pub use whatsapp::{whatsapp_routes, WhatsAppHandlers};
