//! In-memory implementation of LookupStore.
//!
//! Seeded once through builder methods and read-only afterwards, so it needs
//! no locking. Used by unit and HTTP tests and by local runs without a
//! database.
//!
//! # Usage
//!
//! ```ignore
//! use vote_assist::adapters::memory::InMemoryLookupStore;
//!
//! let store = InMemoryLookupStore::new()
//!     .with_instruction(InstructionId::ENROLL_NEW_VOTER, "Fill Form 6 online.")
//!     .with_blo("Govt LP School, Painavu", "Mini Joseph");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::voter::{InstructionId, VoterIdentity, VoterRecord};
use crate::ports::LookupStore;

/// LookupStore backed by plain collections.
///
/// Voters are kept in insertion order so duplicate matches resolve to the
/// first one seeded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookupStore {
    voters: Vec<VoterRecord>,
    instructions: HashMap<InstructionId, String>,
    blos: Vec<(String, String)>,
}

impl InMemoryLookupStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a roll entry.
    pub fn with_voter(mut self, voter: VoterRecord) -> Self {
        self.voters.push(voter);
        self
    }

    /// Sets instruction text, replacing any earlier text for the same id.
    pub fn with_instruction(mut self, id: InstructionId, content: impl Into<String>) -> Self {
        self.instructions.insert(id, content.into());
        self
    }

    /// Adds a booth-level officer for a polling-station address.
    pub fn with_blo(
        mut self,
        polling_station_address: impl Into<String>,
        blo_name: impl Into<String>,
    ) -> Self {
        self.blos
            .push((polling_station_address.into(), blo_name.into()));
        self
    }
}

#[async_trait]
impl LookupStore for InMemoryLookupStore {
    async fn find_instruction(&self, id: InstructionId) -> Result<Option<String>, DomainError> {
        Ok(self.instructions.get(&id).cloned())
    }

    async fn find_voter_by_identity(
        &self,
        identity: &VoterIdentity,
    ) -> Result<Option<VoterRecord>, DomainError> {
        Ok(self
            .voters
            .iter()
            .find(|v| {
                v.full_name == identity.full_name()
                    && v.date_of_birth == Some(identity.date_of_birth())
                    && v.relative_name.as_deref() == Some(identity.relative_name())
            })
            .cloned())
    }

    async fn find_voter_by_name_and_phone(
        &self,
        full_name: &str,
        phone_number: &str,
    ) -> Result<Option<VoterRecord>, DomainError> {
        Ok(self
            .voters
            .iter()
            .find(|v| v.full_name == full_name && v.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn find_polling_station(&self, voter_id: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .voters
            .iter()
            .find(|v| v.voter_id == voter_id)
            .and_then(|v| v.polling_station_address.clone()))
    }

    async fn find_blo_name(
        &self,
        polling_station_address: &str,
    ) -> Result<Option<String>, DomainError> {
        Ok(self
            .blos
            .iter()
            .find(|(address, _)| address == polling_station_address)
            .map(|(_, name)| name.clone()))
    }
}
