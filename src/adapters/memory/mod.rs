//! In-memory adapters for tests and database-less local runs.

mod in_memory_lookup_store;

pub use in_memory_lookup_store::InMemoryLookupStore;
