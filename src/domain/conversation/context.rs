//! Context markers and the active-context projection.
//!
//! Markers are the only conversational memory: the classifier hands back
//! whatever the previous turn emitted, and every branch re-emits the markers
//! it wants to keep. A marker emitted with lifespan zero is a clear.

use std::collections::BTreeSet;
use std::fmt;

use super::draft::VoterSearchDraft;

/// Context names the dispatcher emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContextName {
    MainMenu,
    GeneralMenu,
    GeneralSubmenu,
    VoterServicesMenu,
    VoterServicesSubmenu,
    AwaitingFullName,
    AwaitingDob,
    AwaitingRelative,
    AwaitingVoterId,
    TempVoterData,
}

impl ContextName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextName::MainMenu => "main-menu",
            ContextName::GeneralMenu => "general-menu",
            ContextName::GeneralSubmenu => "general-submenu",
            ContextName::VoterServicesMenu => "voterservices-menu",
            ContextName::VoterServicesSubmenu => "voterservices-submenu",
            ContextName::AwaitingFullName => "awaiting_full_name",
            ContextName::AwaitingDob => "awaiting_dob",
            ContextName::AwaitingRelative => "awaiting_relative",
            ContextName::AwaitingVoterId => "awaiting_voter_id",
            ContextName::TempVoterData => "temp_voterdata",
        }
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A context marker emitted by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMarker {
    pub name: ContextName,
    /// Remaining conversational turns; zero clears the marker.
    pub lifespan: u32,
    /// Partially collected search fields, only on `temp_voterdata`.
    pub draft: Option<VoterSearchDraft>,
}

impl ContextMarker {
    /// Marker kept alive for `lifespan` turns.
    pub fn keep(name: ContextName, lifespan: u32) -> Self {
        Self {
            name,
            lifespan,
            draft: None,
        }
    }

    /// Marker cleared on this turn.
    pub fn clear(name: ContextName) -> Self {
        Self::keep(name, 0)
    }

    /// The `temp_voterdata` marker carrying a search draft.
    pub fn carrying(draft: VoterSearchDraft, lifespan: u32) -> Self {
        Self {
            name: ContextName::TempVoterData,
            lifespan,
            draft: Some(draft),
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.lifespan == 0
    }
}

/// Short names of the contexts currently alive for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveContexts(BTreeSet<String>);

impl ActiveContexts {
    /// Projects session-qualified context names onto their short names.
    ///
    /// Each item is `(qualified_name, lifespan)`. Markers reported with an
    /// explicit zero lifespan are expired and skipped. Short names are
    /// lowercased since classifier context ids are case-insensitive.
    pub fn from_qualified<'a, I>(markers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<u32>)>,
    {
        let names = markers
            .into_iter()
            .filter(|(_, lifespan)| *lifespan != Some(0))
            .filter_map(|(name, _)| short_name(name))
            .collect();
        Self(names)
    }

    pub fn contains(&self, name: ContextName) -> bool {
        self.0.contains(name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ActiveContexts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", names.join(", "))
    }
}

fn short_name(qualified: &str) -> Option<String> {
    let short = qualified.rsplit('/').next()?.trim();
    if short.is_empty() {
        None
    } else {
        Some(short.to_ascii_lowercase())
    }
}
