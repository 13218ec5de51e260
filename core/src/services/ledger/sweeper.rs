//! Background sweep of expired verification records
//!
//! A single timer task; never re-entrant (each tick completes before the
//! next sweep starts). Only wired for the in-memory backend, where
//! nothing else bounds growth; the durable backend may rely on on-access
//! expiry alone.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;

use super::service::Ledger;
use super::store::LedgerStore;

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to sweep, in seconds
    pub interval_seconds: u64,
    /// Whether the sweeper runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // hourly
            enabled: true,
        }
    }
}

/// Periodic sweeper over a ledger
pub struct LedgerSweeper<S: LedgerStore + 'static> {
    ledger: Arc<Ledger<S>>,
    config: SweeperConfig,
}

impl<S: LedgerStore> LedgerSweeper<S> {
    pub fn new(ledger: Arc<Ledger<S>>, config: SweeperConfig) -> Self {
        Self { ledger, config }
    }

    /// Run a single sweep cycle
    pub async fn run_sweep(&self) -> Result<usize, DomainError> {
        if !self.config.enabled {
            return Ok(0);
        }
        self.ledger.sweep_expired().await
    }

    /// Spawn the sweeper as a background task on a fixed interval
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Verification sweeper is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Verification sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so startup does
            // not race the stores being populated.
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                match self.run_sweep().await {
                    Ok(removed) => {
                        if removed > 0 {
                            info!("Sweep removed {} expired verification records", removed);
                        }
                    }
                    Err(e) => {
                        error!("Verification sweep failed: {}", e);
                    }
                }
            }
        });
    }
}
