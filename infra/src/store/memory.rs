//! In-memory verification ledger backend.
//!
//! Records vanish on restart, which is acceptable for codes that live
//! fifteen minutes. The hourly sweep is still wired for this backend so
//! abandoned records do not accumulate over a long-lived process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use lst_core::domain::entities::verification_record::VerificationRecord;
use lst_core::errors::DomainError;
use lst_core::services::ledger::LedgerStore;

/// Process-local keyed store for verification records
#[derive(Default)]
pub struct MemoryLedgerStore {
    records: RwLock<HashMap<String, VerificationRecord>>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records, expired or not
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn get(&self, key: &str) -> Result<Option<VerificationRecord>, DomainError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, record: VerificationRecord) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .insert(record.key.clone(), record);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(key).is_some())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        let removed = before - records.len();
        if removed > 0 {
            tracing::debug!(removed, "Swept expired verification records from memory");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn record(key: &str, now: DateTime<Utc>, expiration_minutes: i64) -> VerificationRecord {
        VerificationRecord::with_expiration(key.to_string(), json!({}), now, expiration_minutes)
    }

    #[tokio::test]
    async fn put_replaces_the_record_for_a_key() {
        let store = MemoryLedgerStore::new();
        let now = Utc::now();

        store.put(record("alice@example.com", now, 15)).await.unwrap();
        let second = record("alice@example.com", now, 15);
        let second_code = second.code.clone();
        store.put(second).await.unwrap();

        assert_eq!(store.len().await, 1);
        let stored = store.get("alice@example.com").await.unwrap().unwrap();
        assert_eq!(stored.code, second_code);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_existed() {
        let store = MemoryLedgerStore::new();
        store
            .put(record("alice@example.com", Utc::now(), 15))
            .await
            .unwrap();

        assert!(store.delete("alice@example.com").await.unwrap());
        assert!(!store.delete("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_records() {
        let store = MemoryLedgerStore::new();
        let now = Utc::now();
        store.put(record("old@example.com", now - Duration::minutes(30), 15)).await.unwrap();
        store.put(record("live@example.com", now, 15)).await.unwrap();

        let removed = store.sweep_expired(now).await.unwrap();
        assert_eq!(removed, 1);
        assert!(store.get("old@example.com").await.unwrap().is_none());
        assert!(store.get("live@example.com").await.unwrap().is_some());
    }
}
