//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LookupStore` - Read-only voter, instruction and BLO lookups
//! - `IntentClassifier` - Natural-language intent detection

mod intent_classifier;
mod lookup_store;

pub use intent_classifier::{ClassifierError, IntentClassifier, IntentRef, OutputContext, QueryResult};
pub use lookup_store::LookupStore;
