//! HTTP client for the managed backend's auth-identity admin API.
//!
//! Credentials never touch our own tables; every credential operation is
//! proxied to this service with a server-side admin key.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

use lst_core::errors::DomainError;
use lst_core::repositories::IdentityClient;

use crate::InfrastructureError;

/// Identity service connection settings
#[derive(Debug, Clone)]
pub struct IdentityServiceConfig {
    /// Base URL of the identity admin API
    pub base_url: String,
    /// Server-side admin key, sent as a bearer token
    pub admin_key: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl IdentityServiceConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let base_url = std::env::var("IDENTITY_SERVICE_URL")
            .map_err(|_| InfrastructureError::Config("IDENTITY_SERVICE_URL not set".to_string()))?;
        let admin_key = std::env::var("IDENTITY_ADMIN_KEY")
            .map_err(|_| InfrastructureError::Config("IDENTITY_ADMIN_KEY not set".to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            admin_key,
            request_timeout_secs: std::env::var("IDENTITY_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

#[derive(Deserialize)]
struct CreatedAccount {
    user_id: Uuid,
}

/// Reqwest-backed identity admin client
pub struct HttpIdentityClient {
    client: reqwest::Client,
    config: IdentityServiceConfig,
}

impl HttpIdentityClient {
    pub fn new(config: IdentityServiceConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(IdentityServiceConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn check_status(
        &self,
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(operation, status = %status, "Identity service call failed");
        Err(DomainError::dependency(
            "identity",
            format!("{} failed with status {}: {}", operation, status, body),
        ))
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<Uuid, DomainError> {
        let response = self
            .client
            .post(self.url("/admin/accounts"))
            .bearer_auth(&self.config.admin_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| DomainError::dependency("identity", e.to_string()))?;

        let response = self.check_status(response, "create_account").await?;
        let created: CreatedAccount = response
            .json()
            .await
            .map_err(|e| DomainError::dependency("identity", format!("Malformed response: {}", e)))?;

        Ok(created.user_id)
    }

    async fn update_email(&self, user_id: Uuid, new_email: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .patch(self.url(&format!("/admin/accounts/{}/email", user_id)))
            .bearer_auth(&self.config.admin_key)
            .json(&json!({ "email": new_email }))
            .send()
            .await
            .map_err(|e| DomainError::dependency("identity", e.to_string()))?;

        self.check_status(response, "update_email").await?;
        Ok(())
    }

    async fn update_password(&self, user_id: Uuid, new_password: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .patch(self.url(&format!("/admin/accounts/{}/password", user_id)))
            .bearer_auth(&self.config.admin_key)
            .json(&json!({ "password": new_password }))
            .send()
            .await
            .map_err(|e| DomainError::dependency("identity", e.to_string()))?;

        self.check_status(response, "update_password").await?;
        Ok(())
    }

    async fn delete_account(&self, user_id: Uuid) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.url(&format!("/admin/accounts/{}", user_id)))
            .bearer_auth(&self.config.admin_key)
            .send()
            .await
            .map_err(|e| DomainError::dependency("identity", e.to_string()))?;

        self.check_status(response, "delete_account").await?;
        Ok(())
    }
}
