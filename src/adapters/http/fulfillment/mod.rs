//! HTTP adapter for the classifier fulfillment webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::{WebhookRequest, WebhookResponse};
pub use handlers::FulfillmentHandlers;
pub use routes::fulfillment_routes;
