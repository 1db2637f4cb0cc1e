//! Input and output of a single fulfillment turn.

use super::context::{ActiveContexts, ContextMarker};
use super::draft::{IntentParameters, VoterSearchDraft};
use super::intent::Intent;

/// Everything the dispatcher sees for one user utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub intent: Intent,
    /// Raw user text, trimmed.
    pub user_input: String,
    pub contexts: ActiveContexts,
    /// Fields carried over from earlier turns in `temp_voterdata`.
    pub draft: VoterSearchDraft,
    pub parameters: IntentParameters,
    /// Sender's phone number, when the turn came in over WhatsApp.
    pub phone_number: Option<String>,
}

impl Turn {
    pub fn new(intent: Intent, user_input: impl AsRef<str>) -> Self {
        Self {
            intent,
            user_input: user_input.as_ref().trim().to_string(),
            contexts: ActiveContexts::default(),
            draft: VoterSearchDraft::default(),
            parameters: IntentParameters::default(),
            phone_number: None,
        }
    }

    pub fn with_contexts(mut self, contexts: ActiveContexts) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn with_draft(mut self, draft: VoterSearchDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_parameters(mut self, parameters: IntentParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        let phone_number = phone_number.into();
        let trimmed = phone_number.trim();
        self.phone_number = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// Reply text plus the next marker set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub text: String,
    pub markers: Vec<ContextMarker>,
}

impl Fulfillment {
    /// Reply that leaves the marker set untouched.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_markers(text: impl Into<String>, markers: Vec<ContextMarker>) -> Self {
        Self {
            text: text.into(),
            markers,
        }
    }

    /// Marker with the given name, if emitted.
    pub fn marker(&self, name: super::ContextName) -> Option<&ContextMarker> {
        self.markers.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ContextName;

    #[test]
    fn turn_trims_user_input() {
        let turn = Turn::new(Intent::MenuSelection, "  1 \n");
        assert_eq!(turn.user_input, "1");
    }

    #[test]
    fn blank_phone_number_is_dropped() {
        let turn = Turn::new(Intent::VoterDetails, "hi").with_phone_number("   ");
        assert_eq!(turn.phone_number, None);

        let turn = Turn::new(Intent::VoterDetails, "hi").with_phone_number(" +911234 ");
        assert_eq!(turn.phone_number.as_deref(), Some("+911234"));
    }

    #[test]
    fn fulfillment_finds_markers() {
        let f = Fulfillment::with_markers(
            "menu",
            vec![
                ContextMarker::keep(ContextName::MainMenu, 10),
                ContextMarker::clear(ContextName::GeneralMenu),
            ],
        );
        assert_eq!(f.marker(ContextName::MainMenu).map(|m| m.lifespan), Some(10));
        assert!(f.marker(ContextName::AwaitingDob).is_none());
        assert!(f.marker(ContextName::GeneralMenu).is_some_and(ContextMarker::is_cleared));
    }
}
