//! Core services
//!
//! - `ledger` - the verification-code lifecycle (the one real component)
//! - `email` - notification sender seam and message rendering
//! - `account` - orchestration of the code-verified account flows
//! - `profile` - passthrough operations on profile data

pub mod account;
pub mod email;
pub mod ledger;
pub mod profile;

pub use account::AccountService;
pub use email::{EmailMessage, EmailSender};
pub use ledger::{CheckOutcome, Clock, Ledger, LedgerStore, SystemClock};
pub use profile::ProfileService;
