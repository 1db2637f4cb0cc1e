//! PostgreSQL implementation of LookupStore.
//!
//! Every query is an exact-match predicate ordered by insertion id, so
//! duplicate roll entries resolve to the earliest row.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::DomainError;
use crate::domain::voter::{InstructionId, VoterIdentity, VoterRecord};
use crate::ports::LookupStore;

const VOTER_COLUMNS: &str = r#"
    voter_id, full_name, date_of_birth, relative_name, gender, phone_number,
    part_name, part_number, assembly_constituency_name, house_address,
    place, district, state, pincode, polling_station_address
"#;

/// PostgreSQL implementation of LookupStore.
#[derive(Clone)]
pub struct PostgresLookupStore {
    pool: PgPool,
}

impl PostgresLookupStore {
    /// Creates a new PostgresLookupStore over a shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupStore for PostgresLookupStore {
    async fn find_instruction(&self, id: InstructionId) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT content FROM instruction WHERE id = $1 LIMIT 1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch instruction", e))?;

        row.map(|r| {
            r.try_get::<String, _>("content")
                .map_err(|e| DomainError::database("Failed to read instruction content", e))
        })
        .transpose()
    }

    async fn find_voter_by_identity(
        &self,
        identity: &VoterIdentity,
    ) -> Result<Option<VoterRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM users \
             WHERE full_name = $1 AND date_of_birth = $2 AND relative_name = $3 \
             ORDER BY id LIMIT 1",
            VOTER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(identity.full_name())
            .bind(identity.date_of_birth())
            .bind(identity.relative_name())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to search voter roll", e))?;

        row.map(row_to_voter_record).transpose()
    }

    async fn find_voter_by_name_and_phone(
        &self,
        full_name: &str,
        phone_number: &str,
    ) -> Result<Option<VoterRecord>, DomainError> {
        let sql = format!(
            "SELECT {} FROM users \
             WHERE full_name = $1 AND phone_number = $2 \
             ORDER BY id LIMIT 1",
            VOTER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(full_name)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch voter details", e))?;

        row.map(row_to_voter_record).transpose()
    }

    async fn find_polling_station(&self, voter_id: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT polling_station_address
            FROM users
            WHERE voter_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(voter_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch polling station", e))?;

        match row {
            Some(row) => row
                .try_get::<Option<String>, _>("polling_station_address")
                .map_err(|e| DomainError::database("Failed to read polling station", e)),
            None => Ok(None),
        }
    }

    async fn find_blo_name(
        &self,
        polling_station_address: &str,
    ) -> Result<Option<String>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT blo_name
            FROM blo
            WHERE polling_station_address = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(polling_station_address)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch booth-level officer", e))?;

        row.map(|r| {
            r.try_get::<String, _>("blo_name")
                .map_err(|e| DomainError::database("Failed to read booth-level officer", e))
        })
        .transpose()
    }
}

fn row_to_voter_record(row: PgRow) -> Result<VoterRecord, DomainError> {
    let map_err = |e: sqlx::Error| DomainError::database("Failed to map voter row", e);

    Ok(VoterRecord {
        voter_id: row.try_get("voter_id").map_err(map_err)?,
        full_name: row.try_get("full_name").map_err(map_err)?,
        date_of_birth: row.try_get("date_of_birth").map_err(map_err)?,
        relative_name: row.try_get("relative_name").map_err(map_err)?,
        gender: row.try_get("gender").map_err(map_err)?,
        phone_number: row.try_get("phone_number").map_err(map_err)?,
        part_name: row.try_get("part_name").map_err(map_err)?,
        part_number: row.try_get("part_number").map_err(map_err)?,
        assembly_constituency_name: row
            .try_get("assembly_constituency_name")
            .map_err(map_err)?,
        house_address: row.try_get("house_address").map_err(map_err)?,
        place: row.try_get("place").map_err(map_err)?,
        district: row.try_get("district").map_err(map_err)?,
        state: row.try_get("state").map_err(map_err)?,
        pincode: row.try_get("pincode").map_err(map_err)?,
        polling_station_address: row.try_get("polling_station_address").map_err(map_err)?,
    })
}
