//! HTTP client for the managed object-storage bucket.
//!
//! Avatars live at a fixed key per user, so a fresh upload replaces the
//! previous object and the public URL stays stable.

use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

use lst_core::errors::DomainError;
use lst_core::repositories::StorageClient;

use crate::InfrastructureError;

/// Object-storage connection settings
#[derive(Debug, Clone)]
pub struct StorageServiceConfig {
    /// Upload endpoint of the bucket API
    pub endpoint: String,
    /// Public base URL objects are served from
    pub public_base_url: String,
    /// API key for uploads, sent as a bearer token
    pub api_key: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl StorageServiceConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let endpoint = std::env::var("STORAGE_ENDPOINT")
            .map_err(|_| InfrastructureError::Config("STORAGE_ENDPOINT not set".to_string()))?;
        let public_base_url = std::env::var("STORAGE_PUBLIC_URL")
            .map_err(|_| InfrastructureError::Config("STORAGE_PUBLIC_URL not set".to_string()))?;
        let api_key = std::env::var("STORAGE_API_KEY")
            .map_err(|_| InfrastructureError::Config("STORAGE_API_KEY not set".to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            api_key,
            request_timeout_secs: std::env::var("STORAGE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Reqwest-backed avatar storage client
pub struct HttpStorageClient {
    client: reqwest::Client,
    config: StorageServiceConfig,
}

impl HttpStorageClient {
    pub fn new(config: StorageServiceConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(StorageServiceConfig::from_env()?)
    }

    fn object_key(user_id: Uuid) -> String {
        format!("avatars/{}", user_id)
    }
}

#[async_trait]
impl StorageClient for HttpStorageClient {
    async fn store_avatar(
        &self,
        user_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, DomainError> {
        let key = Self::object_key(user_id);
        let upload_url = format!("{}/{}", self.config.endpoint, key);

        let response = self
            .client
            .put(&upload_url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| DomainError::dependency("storage", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(user_id = %user_id, status = %status, "Avatar upload failed");
            return Err(DomainError::dependency(
                "storage",
                format!("Upload failed with status {}: {}", status, body),
            ));
        }

        tracing::debug!(user_id = %user_id, "Avatar object stored");
        Ok(format!("{}/{}", self.config.public_base_url, key))
    }
}
