//! Voter module - electoral-roll reference data.
//!
//! Records here are never mutated by this service; they are looked up by
//! exact match through the [`crate::ports::LookupStore`] port.

mod identity;
mod record;

pub use identity::{parse_date_fragment, VoterIdentity};
pub use record::{InstructionId, VoterRecord};
