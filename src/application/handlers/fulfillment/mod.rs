//! Fulfillment handlers - intent dispatch for classifier callbacks.

mod dispatcher;
mod fulfill_intent;

pub use dispatcher::IntentDispatcher;
pub use fulfill_intent::{FulfillIntentCommand, FulfillIntentHandler};
