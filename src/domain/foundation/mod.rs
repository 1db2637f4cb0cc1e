//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! VoteAssist domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, SessionPath};
