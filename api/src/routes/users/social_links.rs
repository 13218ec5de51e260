//! Social link endpoints

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_shared::types::response::ApiResponse;

use crate::dto::users::{SocialLinkResponse, SocialLinksResponse, UpsertSocialLinkRequest};
use crate::error::{error_response, validation_response};
use crate::state::AppState;

/// Handler for GET /api/v1/users/{user_id}/social-links
pub async fn list_social_links<S, E, U, I, SL, St>(
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
    match state.profile_service.list_social_links(*user_id).await {
        Ok(links) => HttpResponse::Ok().json(ApiResponse::success(SocialLinksResponse {
            links: links.into_iter().map(SocialLinkResponse::from).collect(),
        })),
        Err(err) => error_response(&err),
    }
}

/// Handler for POST /api/v1/users/{user_id}/social-links
pub async fn upsert_social_link<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    user_id: web::Path<Uuid>,
    request: web::Json<UpsertSocialLinkRequest>,
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
        .upsert_social_link(*user_id, &request.network, &request.url)
        .await
    {
        Ok(link) => HttpResponse::Ok().json(ApiResponse::success(SocialLinkResponse::from(link))),
        Err(err) => error_response(&err),
    }
}

/// Handler for DELETE /api/v1/users/{user_id}/social-links/{network}
pub async fn delete_social_link<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    path: web::Path<(Uuid, String)>,
) -> HttpResponse
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    let (user_id, network) = path.into_inner();
    match state
        .profile_service
        .delete_social_link(user_id, &network)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::ok()),
        Err(err) => error_response(&err),
    }
}
