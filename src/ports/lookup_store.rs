//! Lookup store port (read-only reference data).
//!
//! Defines the contract for electoral-roll and instruction lookups.
//!
//! # Design
//!
//! - **Read-only**: nothing here mutates reference data
//! - **Exact match**: every lookup is an equality predicate
//! - **First row wins**: duplicate matches resolve to the first row found

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::voter::{InstructionId, VoterIdentity, VoterRecord};

/// Reader port for voter and instruction reference data.
///
/// Implementations share a bounded connection pool across requests and
/// hold no per-request state.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// Canned instruction text by id.
    ///
    /// Returns `None` if no instruction has that id.
    async fn find_instruction(&self, id: InstructionId) -> Result<Option<String>, DomainError>;

    /// Voter matching full name, date of birth and relative name exactly.
    async fn find_voter_by_identity(
        &self,
        identity: &VoterIdentity,
    ) -> Result<Option<VoterRecord>, DomainError>;

    /// Voter matching full name and registered phone number exactly.
    async fn find_voter_by_name_and_phone(
        &self,
        full_name: &str,
        phone_number: &str,
    ) -> Result<Option<VoterRecord>, DomainError>;

    /// Polling-station address assigned to a voter id.
    async fn find_polling_station(&self, voter_id: &str) -> Result<Option<String>, DomainError>;

    /// Booth-level officer serving a polling-station address.
    async fn find_blo_name(
        &self,
        polling_station_address: &str,
    ) -> Result<Option<String>, DomainError>;
}
