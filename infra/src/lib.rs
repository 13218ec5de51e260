//! # Infrastructure Layer
//!
//! Concrete backends for the contracts lst_core defines:
//! - **store**: in-memory verification ledger backend
//! - **database**: MySQL pool plus ledger/profile/social-link persistence
//! - **email**: SMTP delivery via lettre, with a no-op development mode
//! - **identity**: HTTP client for the managed auth-identity subsystem
//! - **storage**: HTTP client for the managed object-storage bucket
//!
//! Exactly one ledger backend is selected per deployment via
//! `LEDGER_BACKEND` (`memory` or `mysql`); the database pool is shared
//! with the profile and social-link repositories either way.

use thiserror::Error;

use lst_core::errors::DomainError;

pub mod database;
pub mod email;
pub mod identity;
pub mod storage;
pub mod store;

pub use database::{DatabasePool, MySqlLedgerStore, MySqlSocialLinkRepository, MySqlUserRepository};
pub use email::SmtpEmailSender;
pub use identity::HttpIdentityClient;
pub use storage::HttpStorageClient;
pub use store::MemoryLedgerStore;

/// Infrastructure-level failures, mapped to [`DomainError`] at the
/// crate boundary
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Email delivery failed
    #[error("Email delivery error: {0}")]
    Email(String),

    /// HTTP request to a managed-backend service failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::dependency("database", e.to_string()),
            InfrastructureError::Email(message) => DomainError::dependency("email", message),
            InfrastructureError::Http(e) => DomainError::dependency("http", e.to_string()),
            InfrastructureError::Serialization(e) => {
                DomainError::dependency("database", e.to_string())
            }
            InfrastructureError::Config(message) => DomainError::configuration(message),
        }
    }
}
