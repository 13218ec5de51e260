//! Verification ledger
//!
//! Owns the lifecycle of a code record: generation, storage with expiry,
//! lookup, attempt counting, expiry eviction, and deletion after success
//! or exhaustion. The lifecycle logic lives here exactly once; storage
//! backends only implement [`LedgerStore`].

mod clock;
mod service;
mod store;
mod sweeper;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, MockClock, SystemClock};
pub use service::Ledger;
pub use store::LedgerStore;
pub use sweeper::{LedgerSweeper, SweeperConfig};
pub use types::CheckOutcome;
