//! Application router - wires handlers, routes and HTTP middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::fulfillment::FulfillIntentHandler;
use crate::application::handlers::messaging::RelayMessageHandler;
use crate::ports::{IntentClassifier, LookupStore};

use super::fulfillment::{fulfillment_routes, FulfillmentHandlers};
use super::whatsapp::{whatsapp_routes, WhatsAppHandlers};

/// Shared application handlers.
#[derive(Clone)]
pub struct AppState {
    pub fulfillment: Arc<FulfillIntentHandler>,
    pub relay: Arc<RelayMessageHandler>,
}

impl AppState {
    /// Builds both handlers over the given ports.
    ///
    /// The relay calls the same fulfillment handler the webhook serves.
    /// `lookup_timeout` bounds the store queries of one turn and must leave
    /// room inside the request timeout for the classifier call.
    pub fn new(
        store: Arc<dyn LookupStore>,
        classifier: Arc<dyn IntentClassifier>,
        lookup_timeout: Duration,
    ) -> Self {
        let fulfillment =
            Arc::new(FulfillIntentHandler::new(store).with_lookup_timeout(lookup_timeout));
        let relay = Arc::new(RelayMessageHandler::new(classifier, fulfillment.clone()));
        Self { fulfillment, relay }
    }
}

/// Creates the full application router.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(fulfillment_routes(FulfillmentHandlers::new(state.fulfillment)))
        .merge(whatsapp_routes(WhatsAppHandlers::new(state.relay)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
