//! Twilio adapter - TwiML replies for the WhatsApp channel.

mod twiml;

pub use twiml::{MessagingResponse, TWIML_CONTENT_TYPE};
