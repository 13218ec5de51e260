//! Registration endpoints: request a code, verify it and create the
//! account.

use actix_web::{web, HttpResponse};
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::auth::{
    MessageResponse, SendVerificationRequest, VerifyCodeRequest, VerifyCodeResponse,
};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for POST /api/v1/auth/send-verification
///
/// Issues a registration code and emails it. The code itself never
/// appears in the response.
pub async fn send_verification<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<SendVerificationRequest>,
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

    let request = request.into_inner();
    match state
        .account_service
        .request_registration_code(&request.email, request.user_data)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(MessageResponse::new(
            "Verification code sent",
        ))),
        Err(err) => error_response(&err),
    }
}

/// Handler for POST /api/v1/auth/verify-code
///
/// Checks the registration code; on success the account is created and
/// the record consumed.
pub async fn verify_code<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verify_registration(&request.email, &request.code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(VerifyCodeResponse {
            account_type: result.account_type.as_str().to_string(),
            user_id: result.user_id,
            user_data: result.user_data,
        })),
        Err(err) => error_response(&err),
    }
}
