//! Account flows: registration, email change, password reset, deletion
//!
//! Pure orchestration over the ledger, the email sender, and the managed
//! store. Nothing here owns lifecycle state of its own.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AccountService;
pub use types::RegistrationResult;
