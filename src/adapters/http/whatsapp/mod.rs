//! HTTP adapter for the Twilio WhatsApp webhook.

mod dto;
mod handlers;
mod routes;

pub use dto::InboundMessageForm;
pub use handlers::WhatsAppHandlers;
pub use routes::whatsapp_routes;
