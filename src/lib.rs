//! VoteAssist - WhatsApp voter-assistance webhook
//!
//! Bridges Twilio WhatsApp messages to a Dialogflow agent and answers the
//! agent's fulfillment callbacks from the electoral roll: menu navigation,
//! voter search, polling-station and booth-level officer lookups.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
