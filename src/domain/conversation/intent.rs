//! Intents recognized by the classifier agent.

use std::fmt;

/// Closed set of intents the dispatcher knows how to fulfill.
///
/// Display names are the names configured on the classifier agent. Any name
/// not listed maps to [`Intent::Unknown`], which is fulfilled with a fallback
/// reply rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    Welcome,
    Restart,
    MenuSelection,
    VoterServicesOptions,
    ProvideFullName,
    ProvideDob,
    ProvideRelativeName,
    GeneralInstructionsOptions,
    BackToVoterServicesMenu,
    BackToMainMenuFromVoterServices,
    BackToGeneralMenu,
    BackToMainMenuFromGeneral,
    DefaultFallback,
    VoterIdStatus,
    UpdateVoterDetail,
    FindPollingStation,
    VoterDetails,
    BloByPollingStation,
    PollingLocation,
    Unknown(String),
}

const DISPLAY_NAMES: &[(&str, Intent)] = &[
    ("Default Welcome Intent", Intent::Welcome),
    ("RestartIntent", Intent::Restart),
    ("MenuSelectionIntent", Intent::MenuSelection),
    ("Voterservicesoptions", Intent::VoterServicesOptions),
    ("ProvideFullName", Intent::ProvideFullName),
    ("ProvideDOB", Intent::ProvideDob),
    ("ProvideRelativeName", Intent::ProvideRelativeName),
    ("GeneralInstructionsOptions", Intent::GeneralInstructionsOptions),
    (
        "Back to voterservices menu from voterservices submenu",
        Intent::BackToVoterServicesMenu,
    ),
    (
        "Back to mainmenu from voterservices menu",
        Intent::BackToMainMenuFromVoterServices,
    ),
    (
        "Back to generalmenu from generalsubmenu",
        Intent::BackToGeneralMenu,
    ),
    ("Back to mainmenu from general", Intent::BackToMainMenuFromGeneral),
    ("Default Fallback Intent", Intent::DefaultFallback),
    ("VoterIdStatus", Intent::VoterIdStatus),
    ("UpdateVoterDetail", Intent::UpdateVoterDetail),
    ("FindPollingStation", Intent::FindPollingStation),
    ("voterdetails", Intent::VoterDetails),
    ("GetBLOByPollingStation", Intent::BloByPollingStation),
    ("pollingLocation", Intent::PollingLocation),
];

impl Intent {
    /// Resolves a classifier display name. Matching is exact.
    pub fn from_display_name(name: &str) -> Self {
        DISPLAY_NAMES
            .iter()
            .find(|(display, _)| *display == name)
            .map(|(_, intent)| intent.clone())
            .unwrap_or_else(|| Intent::Unknown(name.to_string()))
    }

    /// The classifier display name for this intent.
    pub fn display_name(&self) -> &str {
        if let Intent::Unknown(name) = self {
            return name;
        }
        DISPLAY_NAMES
            .iter()
            .find(|(_, intent)| intent == self)
            .map(|(display, _)| *display)
            .unwrap_or("UnknownIntent")
    }

    /// Whether the intent reads from the lookup store.
    pub fn requires_lookup(&self) -> bool {
        matches!(
            self,
            Intent::VoterServicesOptions
                | Intent::ProvideRelativeName
                | Intent::VoterIdStatus
                | Intent::VoterDetails
                | Intent::BloByPollingStation
                | Intent::PollingLocation
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<&str> for Intent {
    fn from(name: &str) -> Self {
        Intent::from_display_name(name)
    }
}
