//! Typed views over classifier parameters.
//!
//! The electoral-roll search collects name, date of birth and relative name
//! over three turns. Partial progress rides in the `temp_voterdata` marker
//! and is read back into a [`VoterSearchDraft`] at the boundary.

use chrono::NaiveDate;

use super::slots::Slots;
use crate::domain::voter::parse_date_fragment;

/// Parameters the classifier extracted from the current utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentParameters {
    pub full_name: Option<String>,
    /// Raw `@sys.date` value, possibly a full timestamp.
    pub date: Option<String>,
    pub relative_name: Option<String>,
    pub voter_id: Option<String>,
}

impl IntentParameters {
    pub fn from_slots(slots: &Slots) -> Self {
        Self {
            full_name: slots.get("full_name").map(str::to_string),
            date: slots
                .first_of(&["date", "date_of_birth"])
                .map(str::to_string),
            relative_name: slots.get("relative_name").map(str::to_string),
            voter_id: slots.get("voter_id").map(str::to_string),
        }
    }

    /// The date parameter reduced to a calendar date.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_fragment)
    }
}

/// Search fields carried across turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterSearchDraft {
    pub full_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl VoterSearchDraft {
    pub fn with_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            date_of_birth: None,
        }
    }

    pub fn with_name_and_dob(full_name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            full_name: Some(full_name.into()),
            date_of_birth: Some(date_of_birth),
        }
    }

    /// Reads the draft from a `temp_voterdata` parameter bag.
    ///
    /// `date_of_birth` wins over `date`; both may be timestamps.
    pub fn from_slots(slots: &Slots) -> Self {
        Self {
            full_name: slots.get("full_name").map(str::to_string),
            date_of_birth: slots
                .first_of(&["date_of_birth", "date"])
                .and_then(parse_date_fragment),
        }
    }

    /// Parameter bag written into the outgoing marker.
    pub fn to_slots(&self) -> Slots {
        let mut slots = Slots::new();
        if let Some(name) = &self.full_name {
            slots.insert("full_name", name);
        }
        if let Some(dob) = self.date_of_birth {
            let dob = dob.format("%Y-%m-%d").to_string();
            slots.insert("date", &dob);
            slots.insert("date_of_birth", &dob);
        }
        slots
    }
}
