//! Avatar upload endpoint.
//!
//! Multipart upload, capped while streaming so an oversized body is
//! rejected before it is buffered whole.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use uuid::Uuid;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;
use lst_core::services::profile::MAX_AVATAR_BYTES;
use lst_shared::types::response::{ApiResponse, Empty};

use crate::dto::users::AvatarResponse;
use crate::error::error_response;
use crate::state::AppState;

fn bad_request(message: &str) -> HttpResponse {
    let body: ApiResponse<Empty> = ApiResponse::error(message);
    HttpResponse::BadRequest().json(body)
}

/// Handler for POST /api/v1/users/{user_id}/avatar
///
/// Expects a single multipart field named `file`.
pub async fn upload_avatar<S, E, U, I, SL, St>(
    state: web::Data<AppState<S, E, U, I, SL, St>>,
    user_id: web::Path<Uuid>,
    mut payload: Multipart,
) -> HttpResponse
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_request(&format!("Malformed multipart body: {}", e)),
        };

        if field.name() != "file" {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes: Vec<u8> = Vec::new();
        loop {
            match field.try_next().await {
                Ok(Some(chunk)) => {
                    if bytes.len() + chunk.len() > MAX_AVATAR_BYTES {
                        return bad_request(&format!(
                            "Avatar exceeds the {} KiB limit",
                            MAX_AVATAR_BYTES / 1024
                        ));
                    }
                    bytes.extend_from_slice(&chunk);
                }
                Ok(None) => break,
                Err(e) => return bad_request(&format!("Upload interrupted: {}", e)),
            }
        }

        upload = Some((content_type, bytes));
        break;
    }

    let Some((content_type, bytes)) = upload else {
        return bad_request("Missing multipart field 'file'");
    };

    match state
        .profile_service
        .upload_avatar(*user_id, &content_type, bytes)
        .await
    {
        Ok(public_url) => {
            HttpResponse::Ok().json(ApiResponse::success(AvatarResponse { public_url }))
        }
        Err(err) => error_response(&err),
    }
}
