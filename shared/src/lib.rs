//! Shared utilities and common types for the Listado server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelope types
//! - Validation utilities (email, password)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, EmailConfig, Environment, ServerConfig, VerificationConfig};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::validation;
