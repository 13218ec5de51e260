//! Mock email sender for testing
//!
//! Records every delivered message and can simulate delivery failure.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::message::EmailMessage;
use super::sender::EmailSender;

/// A message captured by the mock sender
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub message: EmailMessage,
}

/// Mock sender capturing outbound mail
#[derive(Default)]
pub struct MockEmailSender {
    sent: Arc<RwLock<Vec<SentEmail>>>,
    counter: AtomicU64,
    simulate_failure: AtomicBool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender that fails every delivery
    pub fn failing() -> Self {
        let sender = Self::default();
        sender.simulate_failure.store(true, Ordering::SeqCst);
        sender
    }

    /// Toggle failure simulation at runtime
    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// All messages delivered so far
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.sent.read().await.clone()
    }

    /// The most recent delivery, if any
    pub async fn last(&self) -> Option<SentEmail> {
        self.sent.read().await.last().cloned()
    }

    /// Pull the 6-digit code out of the last delivered text body
    pub async fn last_code(&self) -> Option<String> {
        let last = self.last().await?;
        last.message
            .text_body
            .split_whitespace()
            .find(|w| w.len() == 6 && w.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, recipient: &str, message: &EmailMessage) -> Result<String, DomainError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(DomainError::dependency("email", "simulated delivery failure"));
        }

        self.sent.write().await.push(SentEmail {
            recipient: recipient.to_string(),
            message: message.clone(),
        });
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-message-{}", id))
    }
}
