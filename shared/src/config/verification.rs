//! Verification-code lifecycle configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Tuning knobs for the verification ledger
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes until an issued code expires
    #[serde(default = "default_expiration_minutes")]
    pub code_expiration_minutes: i64,

    /// Failed comparisons allowed before the record is destroyed
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds between background sweeps of expired records
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,

    /// Whether the background sweeper runs at all
    #[serde(default = "default_sweep_enabled")]
    pub sweep_enabled: bool,
}

fn default_expiration_minutes() -> i64 {
    15
}

fn default_max_attempts() -> u32 {
    5
}

fn default_sweep_interval() -> u64 {
    3600
}

fn default_sweep_enabled() -> bool {
    true
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: default_expiration_minutes(),
            max_attempts: default_max_attempts(),
            sweep_interval_seconds: default_sweep_interval(),
            sweep_enabled: default_sweep_enabled(),
        }
    }
}

impl VerificationConfig {
    /// Load verification configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            code_expiration_minutes: env::var("VERIFICATION_CODE_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_expiration_minutes),
            max_attempts: env::var("VERIFICATION_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
            sweep_interval_seconds: env::var("VERIFICATION_SWEEP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval_seconds),
            sweep_enabled: env::var("VERIFICATION_SWEEP_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_enabled),
        }
    }
}
