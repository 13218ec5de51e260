//! User profile repository trait.
//!
//! Implementations persist the profile row in the managed user-record
//! store; the domain layer only sees this contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user_profile::{AccountType, ProfileUpdate, UserProfile};
use crate::errors::DomainError;

/// Persistence contract for user profile rows
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a profile by account id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError>;

    /// Find a profile by verified email address
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DomainError>;

    /// Insert a new profile row
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, DomainError>;

    /// Apply a partial update and return the updated row
    async fn update(&self, id: Uuid, update: ProfileUpdate) -> Result<UserProfile, DomainError>;

    /// Replace the stored email address after a verified change
    async fn update_email(&self, id: Uuid, email: &str) -> Result<(), DomainError>;

    /// Replace the avatar URL after a successful upload
    async fn update_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError>;

    /// Change the account type (organizer promotion)
    async fn update_account_type(
        &self,
        id: Uuid,
        account_type: AccountType,
    ) -> Result<(), DomainError>;

    /// Delete the profile row
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
