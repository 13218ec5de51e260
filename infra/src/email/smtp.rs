//! SMTP transport implementation of the EmailSender trait.
//!
//! When no SMTP host is configured the sender runs in no-op mode and
//! only logs, so development environments work without a mail relay.

use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use uuid::Uuid;

use lst_core::errors::DomainError;
use lst_core::services::email::{EmailMessage, EmailSender};
use lst_shared::config::EmailConfig;

use crate::InfrastructureError;

/// Async SMTP sender, or a logging no-op when unconfigured
pub struct SmtpEmailSender {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl SmtpEmailSender {
    /// Build the sender from configuration.
    ///
    /// An empty `smtp_host` selects no-op mode.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let from = config
            .smtp_from
            .parse::<Mailbox>()
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP_FROM address: {}", e)))?;

        let transport = if !config.is_configured() {
            tracing::warn!("SMTP host not configured; email sender running in no-op mode");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            }
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to configure SMTP transport: {}", e))
            })?
            .port(config.smtp_port);

            let builder = if let (Some(username), Some(password)) =
                (&config.smtp_username, &config.smtp_password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport, from })
    }

    /// Whether a real SMTP relay is behind this sender
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, recipient: &str, message: &EmailMessage) -> Result<String, DomainError> {
        let transport = match &self.transport {
            Some(transport) => transport,
            None => {
                let id = format!("noop-{}", Uuid::new_v4());
                tracing::info!(
                    recipient,
                    subject = %message.subject,
                    message_id = %id,
                    "No-op email sender; skipping actual send"
                );
                return Ok(id);
            }
        };

        let to = recipient
            .parse::<Mailbox>()
            .map_err(|e| DomainError::validation(format!("Invalid recipient address: {}", e)))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&message.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(message.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(message.html_body.clone()),
                    ),
            )
            .map_err(|e| DomainError::dependency("email", format!("Failed to build message: {}", e)))?;

        let response = transport
            .send(email)
            .await
            .map_err(|e| DomainError::dependency("email", format!("Delivery failed: {}", e)))?;

        let id = response.message().collect::<Vec<&str>>().join(" ");
        tracing::info!(recipient, subject = %message.subject, "Email delivered");
        Ok(id)
    }
}
