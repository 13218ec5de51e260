//! Route table wiring.
//!
//! `configure_routes` is generic over the same trait seams as
//! [`AppState`], so the production binary and the integration tests
//! mount identical routes over different collaborators.

use actix_web::web;

use lst_core::repositories::{IdentityClient, SocialLinkRepository, StorageClient, UserRepository};
use lst_core::services::email::EmailSender;
use lst_core::services::ledger::LedgerStore;

use crate::routes::{auth, health, users};

/// Mount every route under /api/v1, plus /health at the root
pub fn configure_routes<S, E, U, I, SL, St>(cfg: &mut web::ServiceConfig)
where
    S: LedgerStore + 'static,
    E: EmailSender + 'static,
    U: UserRepository + 'static,
    I: IdentityClient + 'static,
    SL: SocialLinkRepository + 'static,
    St: StorageClient + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route(
                            "/send-verification",
                            web::post().to(auth::send_verification::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/verify-code",
                            web::post().to(auth::verify_code::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/send-change-email",
                            web::post().to(auth::send_change_email::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/verify-change-email",
                            web::post().to(auth::verify_change_email::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/send-password-reset",
                            web::post().to(auth::send_password_reset::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(auth::reset_password::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/send-delete-code",
                            web::post().to(auth::send_delete_code::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/confirm-delete-user",
                            web::post().to(auth::confirm_delete_user::<S, E, U, I, SL, St>),
                        ),
                )
                .service(
                    web::scope("/users/{user_id}")
                        .route(
                            "/profile",
                            web::get().to(users::get_profile::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/profile",
                            web::put().to(users::update_profile::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/avatar",
                            web::post().to(users::upload_avatar::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/promote",
                            web::post().to(users::promote_to_organizer::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/social-links",
                            web::get().to(users::list_social_links::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/social-links",
                            web::post().to(users::upsert_social_link::<S, E, U, I, SL, St>),
                        )
                        .route(
                            "/social-links/{network}",
                            web::delete().to(users::delete_social_link::<S, E, U, I, SL, St>),
                        ),
                ),
        );
}
