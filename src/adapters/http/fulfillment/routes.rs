//! HTTP routes for the fulfillment webhook.

use axum::{routing::get, Router};

use super::handlers::{fulfill_intent, health_check, FulfillmentHandlers};

/// Creates the root router.
///
/// Routes:
/// - `GET /` - Liveness text
/// - `POST /` - Classifier fulfillment callback
pub fn fulfillment_routes(handlers: FulfillmentHandlers) -> Router {
    Router::new()
        .route("/", get(health_check).post(fulfill_intent))
        .with_state(handlers)
}
