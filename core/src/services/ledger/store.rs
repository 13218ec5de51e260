//! Storage trait for the verification ledger
//!
//! Backends are dumb keyed storage; all lifecycle decisions (expiry,
//! attempt counting, deletion policy) are made by [`super::Ledger`].
//! Pick one backend per deployment target, never both.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

/// Keyed storage for verification records
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Fetch the record for a key, expired or not
    async fn get(&self, key: &str) -> Result<Option<VerificationRecord>, DomainError>;

    /// Store a record, replacing any existing record for the same key
    async fn put(&self, record: VerificationRecord) -> Result<(), DomainError>;

    /// Delete the record for a key; returns whether one existed
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// Remove every record whose `expires_at` is at or before `now`;
    /// returns the number removed
    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
