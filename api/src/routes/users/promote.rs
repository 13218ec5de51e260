//! Organizer promotion endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::users::PromoteResponse;
use crate::error::error_response;
use crate::state::AppState;

/// Handler for POST /api/v1/users/{user_id}/promote
pub async fn promote_to_organizer<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    user_id: web::Path<Uuid>,
) -> HttpResponse
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    match state.profile_service.promote_to_organizer(*user_id).await {
        Ok(account_type) => HttpResponse::Ok().json(ApiResponse::success(PromoteResponse {
            account_type: account_type.as_str().to_string(),
        })),
        Err(err) => error_response(&err),
    }
}
