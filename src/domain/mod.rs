//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `conversation` - Intents, context markers, turns and reply copy
//! - `voter` - Electoral-roll reference records

pub mod conversation;
pub mod foundation;
pub mod voter;
