//! Shared application state injected into handlers

use std::sync::Arc;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_core::services::{AccountService, ProfileService};

/// Services shared by every handler.
///
/// Generic over the trait seams so production wiring and tests inject
/// different collaborators through the same state type.
pub struct AppState<S, E, U, I, SL, St>
where
    S: LedgerStore,
    E: EmailSender,
    U: UserRepository,
    I: IdentityClient,
    SL: SocialLinkRepository,
    St: StorageClient,
{
    pub account_service: Arc<AccountService<S, E, U, I, SL>>,
    pub profile_service: Arc<ProfileService<U, SL, St>>,
}

impl<S, E, U, I, SL, St> AppState<S, E, U, I, SL, St>
where
    S: LedgerStore,
    E: EmailSender,
    U: UserRepository,
    I: IdentityClient,
    SL: SocialLinkRepository,
    St: StorageClient,
{
    pub fn new(
        account_service: Arc<AccountService<S, E, U, I, SL>>,
        profile_service: Arc<ProfileService<U, SL, St>>,
    ) -> Self {
        Self {
            account_service,
            profile_service,
        }
    }
}
