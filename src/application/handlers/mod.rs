//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod fulfillment;
pub mod messaging;

pub use fulfillment::{FulfillIntentCommand, FulfillIntentHandler, IntentDispatcher};
pub use messaging::{RelayMessageCommand, RelayMessageHandler, RelayMessageResult};
