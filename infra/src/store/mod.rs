//! In-memory ledger backend for single-node deployments and tests

mod memory;

pub use memory::MemoryLedgerStore;
