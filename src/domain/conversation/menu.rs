//! Menu screens and the collection sub-flow.
//!
//! Screens are implicit: a screen is "current" when its marker is alive.
//! Every transition here is pure; branches that need reference data live in
//! the application dispatcher and reuse the marker sets defined below.

use super::context::{ContextMarker, ContextName};
use super::draft::{IntentParameters, VoterSearchDraft};
use super::replies;
use super::turn::Fulfillment;

/// Lifespan of a top-level or section menu marker.
pub const MENU_LIFESPAN: u32 = 10;
/// Lifespan of a submenu marker.
pub const SUBMENU_LIFESPAN: u32 = 5;
/// Lifespan of an `awaiting_*` collection marker.
pub const AWAITING_LIFESPAN: u32 = 3;
/// Lifespan of the `temp_voterdata` draft marker.
pub const DRAFT_LIFESPAN: u32 = 6;

use ContextName::*;

fn markers(keep: &[(ContextName, u32)], clear: &[ContextName]) -> Vec<ContextMarker> {
    keep.iter()
        .map(|(name, lifespan)| ContextMarker::keep(*name, *lifespan))
        .chain(clear.iter().map(|name| ContextMarker::clear(*name)))
        .collect()
}

/// Top-level menu on first contact.
pub fn welcome() -> Fulfillment {
    Fulfillment::with_markers(
        replies::WELCOME_MENU,
        markers(
            &[(MainMenu, MENU_LIFESPAN)],
            &[GeneralSubmenu, GeneralMenu, VoterServicesMenu, VoterServicesSubmenu],
        ),
    )
}

/// Top-level menu after an explicit restart. Also drops a pending voter-id prompt.
pub fn restart() -> Fulfillment {
    Fulfillment::with_markers(
        replies::RESTART_MENU,
        markers(
            &[(MainMenu, MENU_LIFESPAN)],
            &[
                AwaitingVoterId,
                GeneralSubmenu,
                GeneralMenu,
                VoterServicesMenu,
                VoterServicesSubmenu,
            ],
        ),
    )
}

/// Choice made on the top-level menu.
pub fn menu_selection(input: &str) -> Fulfillment {
    match input {
        "1" => general_menu(),
        "2" => voter_services_menu(),
        _ => Fulfillment::with_markers(
            replies::MAIN_MENU_INVALID,
            markers(
                &[(MainMenu, MENU_LIFESPAN)],
                &[GeneralSubmenu, GeneralMenu, VoterServicesMenu, VoterServicesSubmenu],
            ),
        ),
    }
}

fn general_menu() -> Fulfillment {
    Fulfillment::with_markers(
        replies::GENERAL_MENU,
        markers(
            &[(GeneralMenu, MENU_LIFESPAN)],
            &[MainMenu, VoterServicesMenu, GeneralSubmenu],
        ),
    )
}

fn voter_services_menu() -> Fulfillment {
    Fulfillment::with_markers(
        replies::VOTER_SERVICES_MENU,
        markers(
            &[(VoterServicesMenu, MENU_LIFESPAN)],
            &[GeneralMenu, MainMenu, GeneralSubmenu, VoterServicesSubmenu],
        ),
    )
}

/// Markers after a voter-services submenu screen is shown.
pub fn voter_services_submenu_markers() -> Vec<ContextMarker> {
    markers(&[(VoterServicesSubmenu, SUBMENU_LIFESPAN)], &[VoterServicesMenu])
}

/// Static voter-services option (e-EPIC download).
pub fn epic_download() -> Fulfillment {
    Fulfillment::with_markers(
        replies::EPIC_DOWNLOAD_STEPS,
        voter_services_submenu_markers(),
    )
}

/// Entry into the electoral-roll search.
pub fn start_voter_search() -> Fulfillment {
    Fulfillment::with_markers(
        replies::PROMPT_FULL_NAME,
        markers(
            &[
                (AwaitingFullName, AWAITING_LIFESPAN),
                (VoterServicesSubmenu, SUBMENU_LIFESPAN),
            ],
            &[VoterServicesMenu],
        ),
    )
}

/// Unrecognized choice on the voter-services menu.
pub fn invalid_voter_services_option() -> Fulfillment {
    Fulfillment::with_markers(
        replies::INVALID_OPTION,
        markers(
            &[(VoterServicesMenu, MENU_LIFESPAN)],
            &[GeneralMenu, MainMenu, GeneralSubmenu, VoterServicesSubmenu],
        ),
    )
}

/// Markers after an instruction fetch fails.
pub fn voter_services_failure_markers() -> Vec<ContextMarker> {
    markers(&[], &[VoterServicesMenu])
}

/// Choice made on the general-instructions menu.
pub fn general_instructions_option(input: &str) -> Fulfillment {
    let submenu = || markers(&[(GeneralSubmenu, SUBMENU_LIFESPAN)], &[GeneralMenu]);
    match input {
        "1" => Fulfillment::with_markers(replies::HOW_TO_VOTE, submenu()),
        "2" => Fulfillment::with_markers(replies::VALID_ID_PROOFS, submenu()),
        _ => Fulfillment::with_markers(
            replies::INVALID_OPTION,
            markers(
                &[(GeneralMenu, MENU_LIFESPAN)],
                &[MainMenu, VoterServicesMenu, GeneralSubmenu],
            ),
        ),
    }
}

pub fn back_to_voter_services_menu() -> Fulfillment {
    Fulfillment::with_markers(
        replies::VOTER_SERVICES_MENU,
        markers(
            &[(VoterServicesMenu, SUBMENU_LIFESPAN)],
            &[VoterServicesSubmenu],
        ),
    )
}

pub fn back_to_main_menu_from_voter_services() -> Fulfillment {
    Fulfillment::with_markers(
        replies::RETURN_MAIN_MENU,
        markers(
            &[(MainMenu, 5)],
            &[VoterServicesMenu, VoterServicesSubmenu],
        ),
    )
}

pub fn back_to_general_menu() -> Fulfillment {
    Fulfillment::with_markers(
        replies::RETURN_GENERAL_MENU,
        markers(&[(GeneralMenu, 5)], &[GeneralSubmenu]),
    )
}

pub fn back_to_main_menu_from_general() -> Fulfillment {
    Fulfillment::with_markers(
        replies::RETURN_MAIN_MENU,
        markers(
            &[(MainMenu, 6)],
            &[GeneralMenu, VoterServicesMenu, GeneralSubmenu],
        ),
    )
}

/// First step of the search: remember the name, ask for the date of birth.
pub fn provide_full_name(parameters: &IntentParameters) -> Fulfillment {
    match parameters.full_name.as_deref() {
        Some(name) => Fulfillment::with_markers(
            replies::PROMPT_DOB,
            vec![
                ContextMarker::keep(AwaitingDob, AWAITING_LIFESPAN),
                ContextMarker::carrying(VoterSearchDraft::with_name(name), DRAFT_LIFESPAN),
            ],
        ),
        None => Fulfillment::with_markers(
            replies::PROMPT_FULL_NAME,
            vec![ContextMarker::keep(AwaitingFullName, AWAITING_LIFESPAN)],
        ),
    }
}

/// Second step: carry name and date of birth, ask for the relative's name.
pub fn provide_dob(parameters: &IntentParameters, draft: &VoterSearchDraft) -> Fulfillment {
    match (draft.full_name.as_deref(), parameters.date_of_birth()) {
        (Some(name), Some(dob)) => Fulfillment::with_markers(
            replies::PROMPT_RELATIVE,
            vec![
                ContextMarker::keep(AwaitingRelative, AWAITING_LIFESPAN),
                ContextMarker::carrying(
                    VoterSearchDraft::with_name_and_dob(name, dob),
                    DRAFT_LIFESPAN,
                ),
            ],
        ),
        _ => Fulfillment::text(replies::MISSING_DOB_OR_NAME),
    }
}

/// Markers after a successful search; the collection flow is torn down.
pub fn voter_found_markers() -> Vec<ContextMarker> {
    markers(
        &[(VoterServicesSubmenu, SUBMENU_LIFESPAN)],
        &[
            VoterServicesMenu,
            AwaitingRelative,
            AwaitingDob,
            AwaitingFullName,
            TempVoterData,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lifespan(f: &Fulfillment, name: ContextName) -> Option<u32> {
        f.marker(name).map(|m| m.lifespan)
    }

    #[test]
    fn welcome_opens_main_menu() {
        let f = welcome();
        assert!(f.text.contains("Welcome to VoteAssist Idukki"));
        assert_eq!(lifespan(&f, MainMenu), Some(10));
        assert_eq!(lifespan(&f, GeneralMenu), Some(0));
    }

    #[test]
    fn restart_clears_voter_id_prompt() {
        let f = restart();
        assert_eq!(lifespan(&f, MainMenu), Some(10));
        assert_eq!(lifespan(&f, AwaitingVoterId), Some(0));
        assert!(f.text.contains("Type a number to continue."));
    }

    #[test]
    fn selecting_general_section() {
        let f = menu_selection("1");
        assert!(f.text.contains("General Instructions Menu"));
        assert_eq!(lifespan(&f, GeneralMenu), Some(10));
        assert_eq!(lifespan(&f, MainMenu), Some(0));
    }

    #[test]
    fn selecting_voter_services_section() {
        let f = menu_selection("2");
        assert!(f.text.starts_with("🗂 Voter Services"));
        assert_eq!(lifespan(&f, VoterServicesMenu), Some(10));
        assert_eq!(lifespan(&f, VoterServicesSubmenu), Some(0));
    }

    #[test]
    fn unimplemented_section_stays_on_main_menu() {
        for input in ["3", "hello", ""] {
            let f = menu_selection(input);
            assert_eq!(f.text, replies::MAIN_MENU_INVALID);
            assert_eq!(lifespan(&f, MainMenu), Some(10));
        }
    }

    #[test]
    fn general_options_open_submenu() {
        let f = general_instructions_option("1");
        assert!(f.text.starts_with("🗳 How to Vote"));
        assert_eq!(lifespan(&f, GeneralSubmenu), Some(5));
        assert_eq!(lifespan(&f, GeneralMenu), Some(0));

        let f = general_instructions_option("2");
        assert!(f.text.contains("Aadhaar Card"));

        let f = general_instructions_option("9");
        assert_eq!(f.text, replies::INVALID_OPTION);
        assert_eq!(lifespan(&f, GeneralMenu), Some(10));
    }

    #[test]
    fn back_navigation_refreshes_parent_and_clears_child() {
        let f = back_to_voter_services_menu();
        assert_eq!(lifespan(&f, VoterServicesMenu), Some(5));
        assert_eq!(lifespan(&f, VoterServicesSubmenu), Some(0));

        let f = back_to_main_menu_from_voter_services();
        assert_eq!(lifespan(&f, MainMenu), Some(5));
        assert_eq!(lifespan(&f, VoterServicesMenu), Some(0));

        let f = back_to_general_menu();
        assert_eq!(f.text, replies::RETURN_GENERAL_MENU);
        assert_eq!(lifespan(&f, GeneralMenu), Some(5));
        assert_eq!(lifespan(&f, GeneralSubmenu), Some(0));

        let f = back_to_main_menu_from_general();
        assert_eq!(lifespan(&f, MainMenu), Some(6));
        assert_eq!(lifespan(&f, GeneralMenu), Some(0));
    }

    #[test]
    fn search_entry_awaits_full_name() {
        let f = start_voter_search();
        assert_eq!(lifespan(&f, AwaitingFullName), Some(3));
        assert_eq!(lifespan(&f, VoterServicesSubmenu), Some(5));
    }

    #[test]
    fn full_name_is_carried_forward() {
        let params = IntentParameters {
            full_name: Some("Asha".to_string()),
            ..Default::default()
        };
        let f = provide_full_name(&params);
        assert_eq!(f.text, replies::PROMPT_DOB);
        assert_eq!(lifespan(&f, AwaitingDob), Some(3));

        let temp = f.marker(TempVoterData).unwrap();
        assert_eq!(temp.lifespan, 6);
        assert_eq!(temp.draft, Some(VoterSearchDraft::with_name("Asha")));
    }

    #[test]
    fn missing_full_name_reprompts() {
        let f = provide_full_name(&IntentParameters::default());
        assert_eq!(f.text, replies::PROMPT_FULL_NAME);
        assert_eq!(lifespan(&f, AwaitingFullName), Some(3));
        assert!(f.marker(TempVoterData).is_none());
    }

    #[test]
    fn dob_is_truncated_and_carried_with_name() {
        let params = IntentParameters {
            date: Some("1990-01-01T12:00:00+05:30".to_string()),
            ..Default::default()
        };
        let f = provide_dob(&params, &VoterSearchDraft::with_name("Asha"));
        assert_eq!(f.text, replies::PROMPT_RELATIVE);
        assert_eq!(lifespan(&f, AwaitingRelative), Some(3));

        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(
            f.marker(TempVoterData).and_then(|m| m.draft.clone()),
            Some(VoterSearchDraft::with_name_and_dob("Asha", dob))
        );
    }

    #[test]
    fn dob_without_carried_name_asks_to_restart() {
        let params = IntentParameters {
            date: Some("1990-01-01".to_string()),
            ..Default::default()
        };
        let f = provide_dob(&params, &VoterSearchDraft::default());
        assert_eq!(f.text, replies::MISSING_DOB_OR_NAME);
        assert!(f.markers.is_empty());

        let f = provide_dob(&IntentParameters::default(), &VoterSearchDraft::with_name("Asha"));
        assert_eq!(f.text, replies::MISSING_DOB_OR_NAME);
    }
}
