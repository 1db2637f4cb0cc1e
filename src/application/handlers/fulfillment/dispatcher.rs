//! IntentDispatcher - decides the reply and next markers for a turn.
//!
//! Menu transitions are pure and delegated to [`menu`]. Branches that read
//! reference data go through the [`LookupStore`] port; a failed lookup is
//! logged and answered with an apology, so `dispatch` never fails.
//!
//! The lookups of one turn share a deadline. A store that does not answer
//! in time counts as a failed lookup, so the apology still goes out before
//! the HTTP request itself times out.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::conversation::{menu, replies, ContextMarker, ContextName, Fulfillment, Intent, Turn};
use crate::domain::foundation::DomainError;
use crate::domain::voter::{InstructionId, VoterIdentity};
use crate::ports::LookupStore;

/// Lifespan of the `awaiting_voter_id` marker set by the BLO lookup.
const BLO_VOTER_ID_LIFESPAN: u32 = 4;
/// Lifespan of the `awaiting_voter_id` marker set by the polling-location lookup.
const LOCATION_VOTER_ID_LIFESPAN: u32 = 5;

/// Deadline for the lookups of one turn unless configured otherwise.
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Maps a turn to its fulfillment.
pub struct IntentDispatcher {
    store: Arc<dyn LookupStore>,
    lookup_timeout: Duration,
}

impl IntentDispatcher {
    pub fn new(store: Arc<dyn LookupStore>) -> Self {
        Self {
            store,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Sets the deadline shared by the lookups of one turn.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub async fn dispatch(&self, turn: &Turn) -> Fulfillment {
        match &turn.intent {
            Intent::Welcome => menu::welcome(),
            Intent::Restart => menu::restart(),
            Intent::MenuSelection => menu::menu_selection(&turn.user_input),
            Intent::VoterServicesOptions => self.voter_services_option(&turn.user_input).await,
            Intent::ProvideFullName => menu::provide_full_name(&turn.parameters),
            Intent::ProvideDob => menu::provide_dob(&turn.parameters, &turn.draft),
            Intent::ProvideRelativeName => self.provide_relative_name(turn).await,
            Intent::GeneralInstructionsOptions => {
                menu::general_instructions_option(&turn.user_input)
            }
            Intent::BackToVoterServicesMenu => menu::back_to_voter_services_menu(),
            Intent::BackToMainMenuFromVoterServices => {
                menu::back_to_main_menu_from_voter_services()
            }
            Intent::BackToGeneralMenu => menu::back_to_general_menu(),
            Intent::BackToMainMenuFromGeneral => menu::back_to_main_menu_from_general(),
            Intent::DefaultFallback => Fulfillment::text(replies::DEFAULT_FALLBACK),
            Intent::VoterIdStatus => self.voter_id_status().await,
            Intent::UpdateVoterDetail => Fulfillment::text(replies::UPDATE_VOTER_DETAIL_STEPS),
            Intent::FindPollingStation => Fulfillment::text(replies::FIND_POLLING_STATION_STEPS),
            Intent::VoterDetails => self.voter_details(turn).await,
            Intent::BloByPollingStation => self.blo_by_polling_station(turn).await,
            Intent::PollingLocation => self.polling_location(turn).await,
            Intent::Unknown(name) => {
                tracing::info!(intent = %name, "Unhandled intent");
                Fulfillment::text(replies::UNKNOWN_INTENT)
            }
        }
    }

    async fn voter_services_option(&self, input: &str) -> Fulfillment {
        let instruction = match input {
            "1" => InstructionId::ENROLL_NEW_VOTER,
            "2" => InstructionId::DELETE_VOTER_ID,
            "3" => InstructionId::SHIFT_ADDRESS,
            "4" => return menu::epic_download(),
            "5" => return menu::start_voter_search(),
            _ => return menu::invalid_voter_services_option(),
        };

        match self
            .lookup("instruction", self.store.find_instruction(instruction))
            .await
        {
            Ok(content) => Fulfillment::with_markers(
                content.unwrap_or_else(|| replies::NO_INSTRUCTIONS.to_string()),
                menu::voter_services_submenu_markers(),
            ),
            Err(e) => {
                log_lookup_failure("instruction", &e);
                Fulfillment::with_markers(
                    replies::lookup_failed("voter services info"),
                    menu::voter_services_failure_markers(),
                )
            }
        }
    }

    async fn provide_relative_name(&self, turn: &Turn) -> Fulfillment {
        let identity = match (
            turn.draft.full_name.as_deref(),
            turn.draft.date_of_birth,
            turn.parameters.relative_name.as_deref(),
        ) {
            (Some(name), Some(dob), Some(relative)) => VoterIdentity::new(name, dob, relative),
            _ => return Fulfillment::text(replies::MISSING_SEARCH_DATA),
        };
        let Ok(identity) = identity else {
            return Fulfillment::text(replies::MISSING_SEARCH_DATA);
        };

        tracing::debug!(
            full_name = identity.full_name(),
            date_of_birth = %identity.date_of_birth(),
            relative_name = identity.relative_name(),
            "Searching electoral roll"
        );

        match self
            .lookup("voter by identity", self.store.find_voter_by_identity(&identity))
            .await
        {
            Ok(Some(voter)) => Fulfillment::with_markers(
                replies::voter_search_card(&voter),
                menu::voter_found_markers(),
            ),
            Ok(None) => Fulfillment::text(replies::VOTER_NOT_FOUND),
            Err(e) => {
                log_lookup_failure("voter by identity", &e);
                Fulfillment::text(replies::lookup_failed("voter records"))
            }
        }
    }

    async fn voter_id_status(&self) -> Fulfillment {
        match self
            .lookup(
                "voter id status",
                self.store.find_instruction(InstructionId::VOTER_ID_STATUS),
            )
            .await
        {
            Ok(Some(content)) => Fulfillment::text(content),
            Ok(None) => Fulfillment::text(replies::NO_INSTRUCTIONS),
            Err(e) => {
                log_lookup_failure("voter id status", &e);
                Fulfillment::text(replies::lookup_failed("voter ID status"))
            }
        }
    }

    async fn voter_details(&self, turn: &Turn) -> Fulfillment {
        let Some(full_name) = turn.parameters.full_name.as_deref() else {
            return Fulfillment::with_markers(
                replies::PROMPT_NAME_FOR_DETAILS,
                vec![ContextMarker::keep(
                    ContextName::AwaitingFullName,
                    menu::AWAITING_LIFESPAN,
                )],
            );
        };

        let Some(phone_number) = turn.phone_number.as_deref() else {
            tracing::debug!("No sender phone number; skipping voter details lookup");
            return Fulfillment::text(replies::DETAILS_NOT_FOUND);
        };

        match self
            .lookup(
                "voter by name and phone",
                self.store.find_voter_by_name_and_phone(full_name, phone_number),
            )
            .await
        {
            Ok(Some(voter)) => Fulfillment::text(replies::voter_details_card(&voter)),
            Ok(None) => Fulfillment::text(replies::DETAILS_NOT_FOUND),
            Err(e) => {
                log_lookup_failure("voter by name and phone", &e);
                Fulfillment::text(replies::lookup_failed("your details"))
            }
        }
    }

    async fn blo_by_polling_station(&self, turn: &Turn) -> Fulfillment {
        let Some(voter_id) = turn.parameters.voter_id.as_deref() else {
            return Fulfillment::with_markers(
                replies::PROMPT_VOTER_ID_FOR_BLO,
                vec![ContextMarker::keep(
                    ContextName::AwaitingVoterId,
                    BLO_VOTER_ID_LIFESPAN,
                )],
            );
        };

        match self.lookup("BLO", self.find_blo(voter_id)).await {
            Ok(reply) => Fulfillment::text(reply),
            Err(e) => {
                log_lookup_failure("BLO", &e);
                Fulfillment::text(replies::lookup_failed("BLO details"))
            }
        }
    }

    /// Two sequential lookups: voter id to polling station, then station to BLO.
    async fn find_blo(&self, voter_id: &str) -> Result<String, DomainError> {
        let Some(station) = self.store.find_polling_station(voter_id).await? else {
            return Ok(replies::BLO_STATION_NOT_FOUND.to_string());
        };

        let reply = match self.store.find_blo_name(&station).await? {
            Some(blo_name) => replies::blo_details(&station, &blo_name),
            None => replies::blo_missing(&station),
        };
        Ok(reply)
    }

    async fn polling_location(&self, turn: &Turn) -> Fulfillment {
        let Some(voter_id) = turn.parameters.voter_id.as_deref() else {
            return Fulfillment::with_markers(
                replies::PROMPT_VOTER_ID_FOR_LOCATION,
                vec![ContextMarker::keep(
                    ContextName::AwaitingVoterId,
                    LOCATION_VOTER_ID_LIFESPAN,
                )],
            );
        };

        match self
            .lookup("polling station", self.store.find_polling_station(voter_id))
            .await
        {
            Ok(Some(address)) => Fulfillment::text(replies::polling_location(&address)),
            Ok(None) => Fulfillment::text(replies::LOCATION_NOT_FOUND),
            Err(e) => {
                log_lookup_failure("polling station", &e);
                Fulfillment::text(replies::lookup_failed("your polling location"))
            }
        }
    }

    /// Runs `query` under the turn's lookup deadline.
    async fn lookup<T, F>(&self, name: &str, query: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.lookup_timeout, query).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::lookup_timeout(name, self.lookup_timeout)),
        }
    }
}

fn log_lookup_failure(lookup: &str, error: &DomainError) {
    tracing::error!(lookup, error = %error, "Lookup store query failed");
}
