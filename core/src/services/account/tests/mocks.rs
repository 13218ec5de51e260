//! Test harness for account service tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lst_shared::config::VerificationConfig;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;
use crate::repositories::identity::MockIdentityClient;
use crate::repositories::social::MockSocialLinkRepository;
use crate::repositories::user::MockUserRepository;
use crate::services::email::MockEmailSender;
use crate::services::ledger::{Ledger, LedgerStore};

use super::super::service::AccountService;

/// Map-backed ledger store shared across harness instances
#[derive(Default)]
pub struct MapStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl MapStore {
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl LedgerStore for MapStore {
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

pub type TestAccountService = AccountService<
    MapStore,
    MockEmailSender,
    MockUserRepository,
    MockIdentityClient,
    MockSocialLinkRepository,
>;

/// Everything an account-flow test needs, with handles kept for
/// assertions
pub struct Harness {
    pub store: Arc<MapStore>,
    pub ledger: Arc<Ledger<MapStore>>,
    pub sender: Arc<MockEmailSender>,
    pub users: Arc<MockUserRepository>,
    pub identity: Arc<MockIdentityClient>,
    pub social: Arc<MockSocialLinkRepository>,
    pub service: TestAccountService,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(
            Arc::new(MockEmailSender::new()),
            Arc::new(MockIdentityClient::new()),
            VerificationConfig::default(),
        )
    }

    pub fn with_config(config: VerificationConfig) -> Self {
        Self::build(
            Arc::new(MockEmailSender::new()),
            Arc::new(MockIdentityClient::new()),
            config,
        )
    }

    pub fn with_failing_sender() -> Self {
        Self::build(
            Arc::new(MockEmailSender::failing()),
            Arc::new(MockIdentityClient::new()),
            VerificationConfig::default(),
        )
    }

    pub fn with_failing_identity() -> Self {
        Self::build(
            Arc::new(MockEmailSender::new()),
            Arc::new(MockIdentityClient::failing()),
            VerificationConfig::default(),
        )
    }

    fn build(
        sender: Arc<MockEmailSender>,
        identity: Arc<MockIdentityClient>,
        config: VerificationConfig,
    ) -> Self {
        let store = Arc::new(MapStore::default());
        let ledger = Arc::new(Ledger::new(Arc::clone(&store), config));
        let users = Arc::new(MockUserRepository::new());
        let social = Arc::new(MockSocialLinkRepository::new());

        let service = AccountService::new(
            Arc::clone(&ledger),
            Arc::clone(&sender),
            Arc::clone(&users),
            Arc::clone(&identity),
            Arc::clone(&social),
        );

        Self {
            store,
            ledger,
            sender,
            users,
            identity,
            social,
            service,
        }
    }

    /// A second service sharing this harness's ledger and stores but
    /// with a different identity client, for retry-after-failure tests
    pub fn with_identity(&self, identity: Arc<MockIdentityClient>) -> TestAccountService {
        AccountService::new(
            Arc::clone(&self.ledger),
            Arc::clone(&self.sender),
            Arc::clone(&self.users),
            identity,
            Arc::clone(&self.social),
        )
    }
}
