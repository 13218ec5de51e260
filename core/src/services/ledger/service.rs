//! Ledger service implementation

use std::sync::Arc;

use lst_shared::config::VerificationConfig;
use tokio::sync::Mutex;
use tracing;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::domain::value_objects::purpose::Purpose;
use crate::errors::DomainResult;

use super::clock::{Clock, SystemClock};
use super::store::LedgerStore;
use super::types::CheckOutcome;

/// Verification ledger over a pluggable storage backend.
///
/// All mutations go through a single async mutex so that concurrent
/// checks cannot both observe `attempts = max - 1` and race past the
/// cap; the attempt limit is atomic, not advisory.
pub struct Ledger<S: LedgerStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    config: VerificationConfig,
    lock: Mutex<()>,
}

impl<S: LedgerStore> Ledger<S> {
    /// Create a ledger on the wall clock
    pub fn new(store: Arc<S>, config: VerificationConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    /// Create a ledger with an injected clock (tests)
    /// Configured code lifetime in minutes, for callers that surface it
    pub fn code_expiration_minutes(&self) -> i64 {
        self.config.code_expiration_minutes
    }

    pub fn with_clock(store: Arc<S>, config: VerificationConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            config,
            lock: Mutex::new(()),
        }
    }

    /// Issue a fresh code for a purpose and email.
    ///
    /// Overwrites any existing record for the same key and returns the
    /// code. Delivery is the caller's job; the ledger never transmits.
    pub async fn issue(
        &self,
        purpose: Purpose,
        email: &str,
        payload: serde_json::Value,
    ) -> DomainResult<String> {
        let _guard = self.lock.lock().await;
        let key = purpose.key(email);
        let record = VerificationRecord::with_expiration(
            key.clone(),
            payload,
            self.clock.now(),
            self.config.code_expiration_minutes,
        );
        let code = record.code.clone();

        self.store.put(record).await?;

        tracing::info!(
            key = %key,
            purpose = ?purpose,
            event = "code_issued",
            "Issued verification code"
        );

        Ok(code)
    }

    /// Check a supplied code against the live record for a key.
    ///
    /// Failure side effects (attempt increment, deletion on expiry or
    /// exhaustion) are applied here; success deliberately leaves the
    /// record in place for the caller to consume via [`Ledger::delete`].
    pub async fn check(
        &self,
        purpose: Purpose,
        email: &str,
        supplied_code: &str,
    ) -> DomainResult<CheckOutcome> {
        let _guard = self.lock.lock().await;
        let key = purpose.key(email);

        let Some(mut record) = self.store.get(&key).await? else {
            tracing::debug!(key = %key, event = "code_not_found", "No live verification record");
            return Ok(CheckOutcome::NotFound);
        };

        if record.is_expired(self.clock.now()) {
            self.store.delete(&key).await?;
            tracing::info!(key = %key, event = "code_expired", "Verification code expired on access");
            return Ok(CheckOutcome::Expired);
        }

        if record.code == supplied_code {
            tracing::info!(key = %key, event = "code_valid", "Verification code accepted");
            return Ok(CheckOutcome::Valid {
                payload: record.payload,
            });
        }

        record.register_failure();
        if record.attempts >= self.config.max_attempts {
            self.store.delete(&key).await?;
            tracing::warn!(
                key = %key,
                event = "attempts_exhausted",
                "Verification attempts exhausted, record destroyed"
            );
            return Ok(CheckOutcome::AttemptsExhausted);
        }

        let remaining = self.config.max_attempts - record.attempts;
        self.store.put(record).await?;
        tracing::warn!(
            key = %key,
            remaining = remaining,
            event = "code_mismatch",
            "Verification code mismatch"
        );

        Ok(CheckOutcome::Mismatch { remaining })
    }

    /// Explicitly consume the record after the dependent action succeeded
    pub async fn delete(&self, purpose: Purpose, email: &str) -> DomainResult<bool> {
        let _guard = self.lock.lock().await;
        let key = purpose.key(email);
        let existed = self.store.delete(&key).await?;
        if existed {
            tracing::info!(key = %key, event = "code_consumed", "Verification record deleted");
        }
        Ok(existed)
    }

    /// Remove every expired record, regardless of access history
    pub async fn sweep_expired(&self) -> DomainResult<usize> {
        let _guard = self.lock.lock().await;
        let removed = self.store.sweep_expired(self.clock.now()).await?;
        if removed > 0 {
            tracing::info!(removed = removed, event = "sweep", "Swept expired verification records");
        }
        Ok(removed)
    }
}
