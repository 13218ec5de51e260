//! MySQL implementations of the core persistence contracts

mod ledger_store_impl;
mod social_repository_impl;
mod user_repository_impl;

pub use ledger_store_impl::MySqlLedgerStore;
pub use social_repository_impl::MySqlSocialLinkRepository;
pub use user_repository_impl::MySqlUserRepository;
