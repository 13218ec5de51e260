//! Profile read/update endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::users::{ProfileResponse, UpdateProfileRequest};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for GET /api/v1/users/{user_id}/profile
pub async fn get_profile<S, E, U, I, SL, St>(
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
    match state.profile_service.get_profile(*user_id).await {
        Ok(profile) => {
            HttpResponse::Ok().json(ApiResponse::success(ProfileResponse::from(profile)))
        }
        Err(err) => error_response(&err),
    }
}

/// Handler for PUT /api/v1/users/{user_id}/profile
pub async fn update_profile<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    user_id: web::Path<Uuid>,
    request: web::Json<UpdateProfileRequest>,
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
        .profile_service
        .update_profile(*user_id, request.into_inner().into())
        .await
    {
        Ok(profile) => {
            HttpResponse::Ok().json(ApiResponse::success(ProfileResponse::from(profile)))
        }
        Err(err) => error_response(&err),
    }
}
