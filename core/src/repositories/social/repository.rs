//! Social-network link repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::social_link::SocialLink;
use crate::errors::DomainError;

/// Persistence contract for social-network link rows
#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    /// All links for a user
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SocialLink>, DomainError>;

    /// Insert or replace the link for `(user_id, network)`
    async fn upsert(&self, link: SocialLink) -> Result<SocialLink, DomainError>;

    /// Delete the link for a network; returns whether a row existed
    async fn delete(&self, user_id: Uuid, network: &str) -> Result<bool, DomainError>;

    /// Delete every link for a user; returns the number removed
    async fn delete_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;
}
