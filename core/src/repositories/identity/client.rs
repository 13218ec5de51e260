//! Auth-identity subsystem contract.
//!
//! Credentials live in the managed backend's identity service, not in our
//! rows; this trait is the only way the domain touches them.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Contract for the managed auth-identity subsystem
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Create credentials for a verified registration; returns the new
    /// account id
    async fn create_account(&self, email: &str, password: &str) -> Result<Uuid, DomainError>;

    /// Replace the email on an existing identity
    async fn update_email(&self, user_id: Uuid, new_email: &str) -> Result<(), DomainError>;

    /// Replace the password on an existing identity
    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError>;

    /// Delete the identity outright
    async fn delete_account(&self, user_id: Uuid) -> Result<(), DomainError>;
}
