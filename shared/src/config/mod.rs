//! Configuration module with business-specific sub-modules
//!
//! Configuration is organised into logical areas:
//! - `database` - Database connection and pool configuration
//! - `email` - SMTP delivery configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `verification` - Verification-code lifecycle tuning

pub mod database;
pub mod email;
pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Verification-code lifecycle configuration
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}
