//! Conversation module - intents, context markers, and reply copy.
//!
//! A conversation has no stored state. Each turn arrives with the intent the
//! classifier recognized and the context markers alive for the session; the
//! dispatcher answers with reply text and the markers for the next turn.

mod context;
mod draft;
mod intent;
pub mod menu;
pub mod replies;
mod slots;
mod turn;

pub use context::{ActiveContexts, ContextMarker, ContextName};
pub use draft::{IntentParameters, VoterSearchDraft};
pub use intent::Intent;
pub use slots::Slots;
pub use turn::{Fulfillment, Turn};
