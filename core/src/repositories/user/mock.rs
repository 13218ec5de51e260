//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user_profile::{AccountType, ProfileUpdate, UserProfile};
use crate::errors::DomainError;

use super::repository::UserRepository;

/// In-memory user repository for tests
#[derive(Default)]
pub struct MockUserRepository {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
    /// When set, every call fails with a dependency error
    fail: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails, for error-path tests
    pub fn failing() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            fail: true,
        }
    }

    /// Seed a profile directly, bypassing `create`
    pub async fn insert(&self, profile: UserProfile) {
        self.profiles.write().await.insert(profile.id, profile);
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::dependency("user-store", "simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        self.check_failure()?;
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DomainError> {
        self.check_failure()?;
        Ok(self
            .profiles
            .read()
            .await
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn create(&self, profile: UserProfile) -> Result<UserProfile, DomainError> {
        self.check_failure()?;
        let mut profiles = self.profiles.write().await;
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(DomainError::validation("Email already registered"));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update(&self, id: Uuid, update: ProfileUpdate) -> Result<UserProfile, DomainError> {
        self.check_failure()?;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| DomainError::validation("User not found"))?;
        update.apply(profile);
        Ok(profile.clone())
    }

    async fn update_email(&self, id: Uuid, email: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| DomainError::validation("User not found"))?;
        profile.email = email.to_string();
        Ok(())
    }

    async fn update_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| DomainError::validation("User not found"))?;
        profile.avatar_url = Some(url.to_string());
        Ok(())
    }

    async fn update_account_type(
        &self,
        id: Uuid,
        account_type: AccountType,
    ) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&id)
            .ok_or_else(|| DomainError::validation("User not found"))?;
        profile.account_type = account_type;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.check_failure()?;
        self.profiles.write().await.remove(&id);
        Ok(())
    }
}
