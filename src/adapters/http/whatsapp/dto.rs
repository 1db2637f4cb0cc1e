//! HTTP DTOs for the Twilio WhatsApp webhook.

use serde::Deserialize;

/// Inbound message form posted by Twilio.
///
/// Twilio sends many more fields; only the text and sender are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundMessageForm {
    #[serde(rename = "Body", default)]
    pub body: String,

    /// Sender address, e.g. `whatsapp:+919876543210`.
    #[serde(rename = "From", default)]
    pub from: Option<String>,
}
