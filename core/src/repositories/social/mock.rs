//! Mock implementation of SocialLinkRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::social_link::SocialLink;
use crate::errors::DomainError;

use super::repository::SocialLinkRepository;

/// In-memory social link repository for tests
#[derive(Default)]
pub struct MockSocialLinkRepository {
    links: Arc<RwLock<Vec<SocialLink>>>,
    fail: bool,
}

impl MockSocialLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails
    pub fn failing() -> Self {
        Self {
            links: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::dependency("social-store", "simulated failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl SocialLinkRepository for MockSocialLinkRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SocialLink>, DomainError> {
        self.check_failure()?;
        Ok(self
            .links
            .read()
            .await
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, link: SocialLink) -> Result<SocialLink, DomainError> {
        self.check_failure()?;
        let mut links = self.links.write().await;
        links.retain(|l| !(l.user_id == link.user_id && l.network == link.network));
        links.push(link.clone());
        Ok(link)
    }

    async fn delete(&self, user_id: Uuid, network: &str) -> Result<bool, DomainError> {
        self.check_failure()?;
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| !(l.user_id == user_id && l.network == network));
        Ok(links.len() < before)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.check_failure()?;
        let mut links = self.links.write().await;
        let before = links.len();
        links.retain(|l| l.user_id != user_id);
        Ok(before - links.len())
    }
}
