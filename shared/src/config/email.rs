//! Email delivery configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host; empty selects the no-op/mock sender
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username, if the relay requires authentication
    pub smtp_username: Option<String>,

    /// SMTP password, if the relay requires authentication
    pub smtp_password: Option<String>,

    /// From address, e.g. `Listado <no-reply@listado.app>`
    pub smtp_from: String,

    /// Use STARTTLS instead of implicit TLS
    #[serde(default = "default_use_starttls")]
    pub use_starttls: bool,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_use_starttls() -> bool {
    true
}

impl EmailConfig {
    /// Load email configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").unwrap_or_default(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_smtp_port),
            smtp_username: env::var("SMTP_USERNAME").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            smtp_from: env::var("SMTP_FROM")
                .unwrap_or_else(|_| String::from("Listado <no-reply@listado.app>")),
            use_starttls: env::var("SMTP_USE_STARTTLS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_use_starttls),
        }
    }

    /// Whether an SMTP relay was configured
    pub fn is_configured(&self) -> bool {
        !self.smtp_host.trim().is_empty()
    }
}
