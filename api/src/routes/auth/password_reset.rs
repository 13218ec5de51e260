//! Password reset endpoints.
//!
//! The send endpoint reports success even for unknown addresses, so the
//! API cannot be used to probe which emails are registered.

use actix_web::{web, HttpResponse};
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::auth::{MessageResponse, ResetPasswordRequest, SendPasswordResetRequest};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/send-password-reset
pub async fn send_password_reset<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<SendPasswordResetRequest>,
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
        .request_password_reset(&request.email)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "If the address is registered, a reset code has been sent",
        ))),
        Err(err) => error_response(&err),
    }
}

/// Handler for POST /api/v1/auth/reset-password
pub async fn reset_password<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(&request.email, &request.code, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Password updated",
        ))),
        Err(err) => error_response(&err),
    }
}
