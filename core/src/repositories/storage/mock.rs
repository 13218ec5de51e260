//! Mock implementation of StorageClient for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::client::StorageClient;

/// In-memory storage client for tests
#[derive(Default)]
pub struct MockStorageClient {
    objects: Arc<RwLock<HashMap<Uuid, Vec<u8>>>>,
    fail: bool,
}

impl MockStorageClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every operation fails
    pub fn failing() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
            fail: true,
        }
    }

    pub async fn stored_bytes(&self, user_id: Uuid) -> Option<Vec<u8>> {
        self.objects.read().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl StorageClient for MockStorageClient {
    async fn store_avatar(
        &self,
        user_id: Uuid,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::dependency("storage", "simulated failure"));
        }
        self.objects.write().await.insert(user_id, bytes);
        Ok(format!("https://storage.listado.app/avatars/{}", user_id))
    }
}
