//! Voter identity value object used for electoral-roll searches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Parses a classifier date value, keeping only the calendar date.
///
/// The classifier reports `@sys.date` values as full timestamps
/// (`1990-01-01T12:00:00+05:30`); the roll stores plain dates.
pub fn parse_date_fragment(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// The three fields a citizen supplies to find themselves in the roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterIdentity {
    full_name: String,
    date_of_birth: NaiveDate,
    relative_name: String,
}

impl VoterIdentity {
    /// Creates a new identity, trimming names and rejecting blanks.
    pub fn new(
        full_name: impl AsRef<str>,
        date_of_birth: NaiveDate,
        relative_name: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let full_name = full_name.as_ref().trim();
        if full_name.is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }
        let relative_name = relative_name.as_ref().trim();
        if relative_name.is_empty() {
            return Err(ValidationError::empty_field("relative_name"));
        }
        Ok(Self {
            full_name: full_name.to_string(),
            date_of_birth,
            relative_name: relative_name.to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn relative_name(&self) -> &str {
        &self.relative_name
    }
}
