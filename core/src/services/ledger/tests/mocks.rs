//! Test doubles for ledger tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;
use crate::services::ledger::store::LedgerStore;

/// Plain map-backed store for exercising the ledger logic
#[derive(Default)]
pub struct TestStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn raw_get(&self, key: &str) -> Option<VerificationRecord> {
        self.records.read().await.get(key).cloned()
    }
}

#[async_trait]
impl LedgerStore for TestStore {
    async fn get(&self, key: &str) -> Result<Option<VerificationRecord>, DomainError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, record: VerificationRecord) -> Result<(), DomainError> {
        self.records.write().await.insert(record.key.clone(), record);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(key).is_some())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !r.is_expired(now));
        Ok(before - records.len())
    }
}
