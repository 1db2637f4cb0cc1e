//! Messaging handlers - inbound channel messages.

mod relay_message;

pub use relay_message::{
    RelayMessageCommand, RelayMessageHandler, RelayMessageResult, CLASSIFIER_UNAVAILABLE,
    EMPTY_REPLY,
};
