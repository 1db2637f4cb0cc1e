//! PostgreSQL adapters - Database implementations for lookup ports.
//!
//! - `PostgresLookupStore` - Exact-match reads over the roll, instruction and BLO tables
//! - `create_pool` / `run_migrations` - Pool construction and schema setup

mod lookup_store;
mod pool;

pub use lookup_store::PostgresLookupStore;
pub use pool::{create_pool, run_migrations};
