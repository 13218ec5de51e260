//! Core business logic and domain layer for the Listado backend
//!
//! This crate owns the verification-code lifecycle (the ledger), the
//! orchestration services for the account flows built on top of it, and
//! the trait seams behind which infrastructure implementations live.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use domain::entities::verification_record::VerificationRecord;
pub use domain::value_objects::purpose::Purpose;
pub use errors::{CodeError, DomainError, DomainResult};
pub use services::ledger::{CheckOutcome, Ledger, LedgerStore};
