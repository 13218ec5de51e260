//! MySQL implementation of the LedgerStore trait.
//!
//! Backs the verification ledger with a `verification_codes` table so
//! codes survive process restarts. The table is dumb storage; expiry
//! and attempt policy stay in the core ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use lst_core::domain::entities::verification_record::VerificationRecord;
use lst_core::errors::DomainError;
use lst_core::services::ledger::LedgerStore;

/// MySQL-backed verification ledger storage
pub struct MySqlLedgerStore {
    pool: MySqlPool,
}

impl MySqlLedgerStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        let payload_raw: String = row
            .try_get("payload")
            .map_err(|e| DomainError::dependency("database", format!("Failed to get payload: {}", e)))?;
        let payload = serde_json::from_str(&payload_raw)
            .map_err(|e| DomainError::dependency("database", format!("Corrupt payload: {}", e)))?;

        Ok(VerificationRecord {
            key: row
                .try_get("record_key")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get record_key: {}", e)))?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get code: {}", e)))?,
            attempts: row
                .try_get::<u32, _>("attempts")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get attempts: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::dependency("database", format!("Failed to get expires_at: {}", e)))?,
            payload,
        })
    }
}

#[async_trait]
impl LedgerStore for MySqlLedgerStore {
    async fn get(&self, key: &str) -> Result<Option<VerificationRecord>, DomainError> {
        let query = r#"
            SELECT record_key, code, attempts, created_at, expires_at, payload
            FROM verification_codes
            WHERE record_key = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: VerificationRecord) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&record.payload)
            .map_err(|e| DomainError::dependency("database", format!("Payload encoding failed: {}", e)))?;

        // One live record per key: an insert for an existing key replaces
        // the previous record wholesale.
        let query = r#"
            INSERT INTO verification_codes
                (record_key, code, attempts, created_at, expires_at, payload)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                code = VALUES(code),
                attempts = VALUES(attempts),
                created_at = VALUES(created_at),
                expires_at = VALUES(expires_at),
                payload = VALUES(payload)
        "#;

        sqlx::query(query)
            .bind(&record.key)
            .bind(&record.code)
            .bind(record.attempts)
            .bind(record.created_at)
            .bind(record.expires_at)
            .bind(payload)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Insert failed: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE record_key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Delete failed: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::dependency("database", format!("Sweep failed: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }
}
