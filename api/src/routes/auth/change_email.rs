//! Email change endpoints.
//!
//! The code goes to the new address, since that is the one being
//! verified.

use actix_web::{web, HttpResponse};
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::auth::{
    ChangeEmailResponse, MessageResponse, SendChangeEmailRequest, VerifyChangeEmailRequest,
};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/send-change-email
pub async fn send_change_email<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<SendChangeEmailRequest>,
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
        .request_email_change(&request.email, request.user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Verification code sent to the new address",
        ))),
        Err(err) => error_response(&err),
    }
}

/// Handler for POST /api/v1/auth/verify-change-email
pub async fn verify_change_email<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<VerifyChangeEmailRequest>,
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
        .confirm_email_change(&request.email, &request.code, request.user_id)
        .await
    {
        Ok(new_email) => {
            HttpResponse::Ok().json(ApiResponse::success(ChangeEmailResponse { new_email }))
        }
        Err(err) => error_response(&err),
    }
}
