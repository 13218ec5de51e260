//! Email delivery trait

use async_trait::async_trait;

use crate::errors::DomainError;

use super::message::EmailMessage;

/// Contract for the external email-delivery service.
///
/// One attempt, fail-fast: implementations must not retry internally.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver a rendered message; returns a provider message id
    async fn send(&self, recipient: &str, message: &EmailMessage) -> Result<String, DomainError>;
}
