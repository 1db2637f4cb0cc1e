//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Lookup store over the electoral roll database
//! - `memory` - Seedable lookup store for tests and local runs
//! - `dialogflow` - Intent classifier REST client
//! - `twilio` - TwiML rendering for WhatsApp replies
//! - `http` - Axum webhook endpoints

pub mod dialogflow;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod twilio;

pub use dialogflow::{DialogflowClient, DialogflowConfig};
pub use memory::InMemoryLookupStore;
pub use postgres::PostgresLookupStore;
