//! Mock implementation of IdentityClient for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::client::IdentityClient;

/// Stored mock identity
#[derive(Debug, Clone)]
pub struct MockIdentity {
    pub email: String,
    pub password: String,
}

/// In-memory identity client for tests
#[derive(Default)]
pub struct MockIdentityClient {
    identities: Arc<RwLock<HashMap<Uuid, MockIdentity>>>,
    fail: bool,
}

impl MockIdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every operation fails
    pub fn failing() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
            fail: true,
        }
    }

    /// Seed an identity with a known id
    pub async fn insert(&self, id: Uuid, email: &str, password: &str) {
        self.identities.write().await.insert(
            id,
            MockIdentity {
                email: email.to_string(),
                password: password.to_string(),
            },
        );
    }

    pub async fn get(&self, id: Uuid) -> Option<MockIdentity> {
        self.identities.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::dependency("identity", "simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityClient for MockIdentityClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<Uuid, DomainError> {
        self.check_failure()?;
        let id = Uuid::new_v4();
        self.insert(id, email, password).await;
        Ok(id)
    }

    async fn update_email(&self, user_id: Uuid, new_email: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut identities = self.identities.write().await;
        let identity = identities
            .get_mut(&user_id)
            .ok_or_else(|| DomainError::validation("Identity not found"))?;
        identity.email = new_email.to_string();
        Ok(())
    }

    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut identities = self.identities.write().await;
        let identity = identities
            .get_mut(&user_id)
            .ok_or_else(|| DomainError::validation("Identity not found"))?;
        identity.password = new_password.to_string();
        Ok(())
    }

    async fn delete_account(&self, user_id: Uuid) -> Result<(), DomainError> {
        self.check_failure()?;
        self.identities.write().await.remove(&user_id);
        Ok(())
    }
}
