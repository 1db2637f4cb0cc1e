//! Read-only reference records from the electoral roll.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the electoral roll.
///
/// Only `voter_id` and `full_name` are guaranteed; the remaining columns are
/// sparsely populated in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoterRecord {
    /// EPIC number.
    pub voter_id: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Father's or other relative's name as printed on the roll.
    pub relative_name: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    /// Polling booth (part) name.
    pub part_name: Option<String>,
    /// Polling booth (part) number.
    pub part_number: Option<String>,
    pub assembly_constituency_name: Option<String>,
    pub house_address: Option<String>,
    pub place: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub polling_station_address: Option<String>,
}

/// Canned reply text keyed by a small integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructionId(i32);

impl InstructionId {
    /// How to enroll as a new voter.
    pub const ENROLL_NEW_VOTER: Self = Self(1);
    /// How to shift address or change constituency.
    pub const SHIFT_ADDRESS: Self = Self(2);
    /// How to delete a voter ID.
    pub const DELETE_VOTER_ID: Self = Self(3);
    /// Status of a voter ID application.
    pub const VOTER_ID_STATUS: Self = Self(10);

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for InstructionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
