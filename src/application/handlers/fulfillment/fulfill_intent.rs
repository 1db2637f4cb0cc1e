//! FulfillIntentHandler - Command handler for classifier fulfillment callbacks.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::conversation::{
    ActiveContexts, ContextName, Fulfillment, Intent, IntentParameters, Slots, Turn,
    VoterSearchDraft,
};
use crate::domain::foundation::SessionPath;
use crate::ports::{LookupStore, QueryResult};

use super::dispatcher::IntentDispatcher;

/// Command to fulfill one classified utterance.
#[derive(Debug, Clone)]
pub struct FulfillIntentCommand {
    pub session: SessionPath,
    pub query_result: QueryResult,
    /// Sender's phone number without the channel prefix.
    pub phone_number: Option<String>,
}

impl FulfillIntentCommand {
    /// Reads the classifier's wire format into a [`Turn`].
    ///
    /// This is the only place parameter bags are interpreted.
    pub fn to_turn(&self) -> Turn {
        let result = &self.query_result;

        let contexts = ActiveContexts::from_qualified(
            result
                .output_contexts
                .iter()
                .map(|ctx| (ctx.name.as_str(), ctx.lifespan_count)),
        );

        let draft = result
            .find_context(ContextName::TempVoterData.as_str())
            .map(|ctx| VoterSearchDraft::from_slots(&Slots::from_json(&ctx.parameters)))
            .unwrap_or_default();

        let parameters = IntentParameters::from_slots(&Slots::from_json(&result.parameters));

        let turn = Turn::new(Intent::from(result.intent_name()), &result.query_text)
            .with_contexts(contexts)
            .with_draft(draft)
            .with_parameters(parameters);

        match &self.phone_number {
            Some(phone) => turn.with_phone_number(phone.as_str()),
            None => turn,
        }
    }
}

/// Handler that turns a classified utterance into a reply.
pub struct FulfillIntentHandler {
    dispatcher: IntentDispatcher,
}

impl FulfillIntentHandler {
    pub fn new(store: Arc<dyn LookupStore>) -> Self {
        Self {
            dispatcher: IntentDispatcher::new(store),
        }
    }

    /// Sets the deadline shared by the lookups of one turn.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.dispatcher = self.dispatcher.with_lookup_timeout(timeout);
        self
    }

    pub async fn handle(&self, cmd: FulfillIntentCommand) -> Fulfillment {
        let turn = cmd.to_turn();

        tracing::info!(
            session = %cmd.session,
            intent = %turn.intent,
            user_input = %turn.user_input,
            active_contexts = %turn.contexts,
            lookup = turn.intent.requires_lookup(),
            "Fulfillment webhook hit"
        );

        let fulfillment = self.dispatcher.dispatch(&turn).await;

        tracing::debug!(
            session = %cmd.session,
            markers = fulfillment.markers.len(),
            cleared = fulfillment.markers.iter().filter(|m| m.is_cleared()).count(),
            "Fulfillment reply ready"
        );

        fulfillment
    }
}
