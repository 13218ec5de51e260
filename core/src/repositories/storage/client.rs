//! Object storage contract for avatar uploads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainError;

/// Contract for the managed object storage bucket
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Upload avatar bytes for a user, replacing any previous object;
    /// returns the public URL
    async fn store_avatar(
        &self,
        user_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError>;
}
