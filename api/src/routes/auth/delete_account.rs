//! Account deletion endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::auth::{ConfirmDeleteRequest, MessageResponse, SendDeleteCodeRequest};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/send-delete-code
pub async fn send_delete_code<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<SendDeleteCodeRequest>,
) -> HttpResponse
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors);
    }

    match state
        .account_service
        .request_account_deletion(&request.email, request.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Deletion confirmation code sent",
        ))),
        Err(err) => error_response(&err),
    }
}

/// Handler for POST /api/v1/auth/confirm-delete-user
pub async fn confirm_delete_user<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<ConfirmDeleteRequest>,
) -> HttpResponse
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors);
    }

    match state
        .account_service
        .confirm_account_deletion(&request.email, &request.code, request.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(err) => error_response(&err),
    }
}
