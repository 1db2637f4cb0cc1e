//! Dialogflow adapter - REST client for the intent classifier port.

mod client;

pub use client::{DialogflowClient, DialogflowConfig, DEFAULT_BASE_URL};
