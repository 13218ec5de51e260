//! Profile service implementation
//!
//! Thin passthrough to the managed store: profile fields, social links,
//! avatar upload, organizer promotion. No lifecycle logic lives here.

use std::sync::Arc;

use tracing;
use uuid::Uuid;

use crate::domain::entities::social_link::SocialLink;
use crate::domain::entities::user_profile::{AccountType, ProfileUpdate, UserProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SocialLinkRepository, StorageClient, UserRepository};

/// Maximum accepted avatar size (256 KiB)
pub const MAX_AVATAR_BYTES: usize = 256 * 1024;

pub struct ProfileService<U, SL, St>
where
    U: UserRepository,
    SL: SocialLinkRepository,
    St: StorageClient,
{
    user_repository: Arc<U>,
    social_repository: Arc<SL>,
    storage_client: Arc<St>,
}

impl<U, SL, St> ProfileService<U, SL, St>
where
    U: UserRepository,
    SL: SocialLinkRepository,
    St: StorageClient,
{
    pub fn new(
        user_repository: Arc<U>,
        social_repository: Arc<SL>,
        storage_client: Arc<St>,
    ) -> Self {
        Self {
            user_repository,
            social_repository,
            storage_client,
        }
    }

    /// Fetch a profile row
    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::validation("User not found"))
    }

    /// Apply a partial profile update
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> DomainResult<UserProfile> {
        if update.is_empty() {
            return Err(DomainError::validation("No profile fields to update"));
        }
        self.user_repository.update(user_id, update).await
    }

    /// List social-network links for a user
    pub async fn list_social_links(&self, user_id: Uuid) -> DomainResult<Vec<SocialLink>> {
        self.social_repository.list_for_user(user_id).await
    }

    /// Insert or replace the link for a network
    pub async fn upsert_social_link(
        &self,
        user_id: Uuid,
        network: &str,
        url: &str,
    ) -> DomainResult<SocialLink> {
        if network.trim().is_empty() {
            return Err(DomainError::validation("Network name is required"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DomainError::validation("Link must be an http(s) URL"));
        }
        self.social_repository
            .upsert(SocialLink::new(user_id, network.trim(), url))
            .await
    }

    /// Delete the link for a network
    pub async fn delete_social_link(&self, user_id: Uuid, network: &str) -> DomainResult<()> {
        let existed = self.social_repository.delete(user_id, network).await?;
        if !existed {
            return Err(DomainError::validation("No link for that network"));
        }
        Ok(())
    }

    /// Upload an avatar and record its public URL on the profile
    pub async fn upload_avatar(
        &self,
        user_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> DomainResult<String> {
        if bytes.is_empty() {
            return Err(DomainError::validation("Avatar file is empty"));
        }
        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(DomainError::validation(format!(
                "Avatar exceeds the {} KiB limit",
                MAX_AVATAR_BYTES / 1024
            )));
        }
        if !content_type.starts_with("image/") {
            return Err(DomainError::validation("Avatar must be an image"));
        }

        // Caller-supplied ids are trusted here, but the row must exist.
        self.get_profile(user_id).await?;

        let public_url = self
            .storage_client
            .store_avatar(user_id, content_type, bytes)
            .await?;
        self.user_repository
            .update_avatar_url(user_id, &public_url)
            .await?;

        tracing::info!(user_id = %user_id, event = "avatar_uploaded", "Avatar stored");
        Ok(public_url)
    }

    /// Promote an account to the organizer type
    pub async fn promote_to_organizer(&self, user_id: Uuid) -> DomainResult<AccountType> {
        self.get_profile(user_id).await?;
        self.user_repository
            .update_account_type(user_id, AccountType::Organizer)
            .await?;

        tracing::info!(user_id = %user_id, event = "organizer_promotion", "Account promoted");
        Ok(AccountType::Organizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::social::MockSocialLinkRepository;
    use crate::repositories::storage::MockStorageClient;
    use crate::repositories::user::MockUserRepository;

    type TestProfileService =
        ProfileService<MockUserRepository, MockSocialLinkRepository, MockStorageClient>;

    async fn service_with_user() -> (Uuid, Arc<MockUserRepository>, TestProfileService) {
        let users = Arc::new(MockUserRepository::new());
        let user_id = Uuid::new_v4();
        users
            .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
            .await;
        let service = ProfileService::new(
            Arc::clone(&users),
            Arc::new(MockSocialLinkRepository::new()),
            Arc::new(MockStorageClient::new()),
        );
        (user_id, users, service)
    }

    #[tokio::test]
    async fn update_profile_rejects_empty_updates() {
        let (user_id, _users, service) = service_with_user().await;
        let err = service
            .update_profile(user_id, ProfileUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn update_profile_applies_fields() {
        let (user_id, _users, service) = service_with_user().await;
        let updated = service
            .update_profile(
                user_id,
                ProfileUpdate {
                    display_name: Some("Alice".to_string()),
                    location: Some("Madrid".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.display_name.as_deref(), Some("Alice"));
        assert_eq!(updated.location.as_deref(), Some("Madrid"));
    }

    #[tokio::test]
    async fn avatar_upload_enforces_the_size_cap() {
        let (user_id, _users, service) = service_with_user().await;
        let oversized = vec![0u8; MAX_AVATAR_BYTES + 1];
        let err = service
            .upload_avatar(user_id, "image/png", oversized)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let at_limit = vec![0u8; MAX_AVATAR_BYTES];
        service.upload_avatar(user_id, "image/png", at_limit).await.unwrap();
    }

    #[tokio::test]
    async fn avatar_upload_rejects_non_images() {
        let (user_id, _users, service) = service_with_user().await;
        let err = service
            .upload_avatar(user_id, "application/pdf", vec![1, 2, 3])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn avatar_url_lands_on_the_profile() {
        let (user_id, users, service) = service_with_user().await;
        let url = service
            .upload_avatar(user_id, "image/jpeg", vec![0xFF, 0xD8])
            .await
            .unwrap();
        let profile = users.find_by_id(user_id).await.unwrap().unwrap();
        assert_eq!(profile.avatar_url.as_deref(), Some(url.as_str()));
    }

    #[tokio::test]
    async fn promotion_sets_organizer_type() {
        let (user_id, users, service) = service_with_user().await;
        let account_type = service.promote_to_organizer(user_id).await.unwrap();
        assert_eq!(account_type, AccountType::Organizer);
        assert_eq!(
            users.find_by_id(user_id).await.unwrap().unwrap().account_type,
            AccountType::Organizer
        );
    }

    #[tokio::test]
    async fn social_link_upsert_replaces_per_network() {
        let (user_id, _users, service) = service_with_user().await;
        service
            .upsert_social_link(user_id, "instagram", "https://instagram.com/alice")
            .await
            .unwrap();
        service
            .upsert_social_link(user_id, "instagram", "https://instagram.com/alice2")
            .await
            .unwrap();

        let links = service.list_social_links(user_id).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://instagram.com/alice2");
    }

    #[tokio::test]
    async fn social_link_validation() {
        let (user_id, _users, service) = service_with_user().await;
        assert!(service
            .upsert_social_link(user_id, "", "https://example.com")
            .await
            .is_err());
        assert!(service
            .upsert_social_link(user_id, "x", "ftp://example.com")
            .await
            .is_err());
        assert!(service.delete_social_link(user_id, "mastodon").await.is_err());
    }
}
