//! End-to-end HTTP tests over the mounted routes.
//!
//! The full route table is exercised against the in-memory ledger store
//! and the core mocks, so these tests cover DTO validation, handler
//! orchestration, and envelope shaping without external services.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use lst_api::{configure_routes, AppState};
use lst_core::domain::entities::user_profile::UserProfile;
use lst_core::repositories::identity::MockIdentityClient;
use lst_core::repositories::social::MockSocialLinkRepository;
use lst_core::repositories::storage::MockStorageClient;
use lst_core::repositories::user::MockUserRepository;
use lst_core::services::email::MockEmailSender;
use lst_core::services::ledger::Ledger;
use lst_core::services::{AccountService, ProfileService};
use lst_infra::MemoryLedgerStore;
use lst_shared::config::VerificationConfig;

type TestState = AppState<
    MemoryLedgerStore,
    MockEmailSender,
    MockUserRepository,
    MockIdentityClient,
    MockSocialLinkRepository,
    MockStorageClient,
>;

struct TestContext {
    state: web::Data<TestState>,
    sender: Arc<MockEmailSender>,
    users: Arc<MockUserRepository>,
    identity: Arc<MockIdentityClient>,
}

fn build_context() -> TestContext {
    let store = Arc::new(MemoryLedgerStore::new());
    let ledger = Arc::new(Ledger::new(store, VerificationConfig::default()));
    let sender = Arc::new(MockEmailSender::new());
    let users = Arc::new(MockUserRepository::new());
    let identity = Arc::new(MockIdentityClient::new());
    let social = Arc::new(MockSocialLinkRepository::new());
    let storage = Arc::new(MockStorageClient::new());

    let account_service = Arc::new(AccountService::new(
        ledger,
        Arc::clone(&sender),
        Arc::clone(&users),
        Arc::clone(&identity),
        Arc::clone(&social),
    ));
    let profile_service = Arc::new(ProfileService::new(
        Arc::clone(&users),
        social,
        storage,
    ));

    TestContext {
        state: web::Data::new(AppState::new(account_service, profile_service)),
        sender,
        users,
        identity,
    }
}

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new().app_data($ctx.state.clone()).configure(
                configure_routes::<
                    MemoryLedgerStore,
                    MockEmailSender,
                    MockUserRepository,
                    MockIdentityClient,
                    MockSocialLinkRepository,
                    MockStorageClient,
                >,
            ),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr $(,)?) => {{
        let request = test::TestRequest::post()
            .uri($path)
            .set_json($body)
            .to_request();
        let response = test::call_service($app, request).await;
        let status = response.status();
        let body: Value = test::read_body_json(response).await;
        (status, body)
    }};
}

#[actix_rt::test]
async fn health_endpoint_reports_healthy() {
    let ctx = build_context();
    let app = test_app!(ctx);

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("healthy"));
}

#[actix_rt::test]
async fn registration_round_trip_over_http() {
    let ctx = build_context();
    let app = test_app!(ctx);

    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/send-verification",
        json!({
            "email": "alice@example.com",
            "user_data": {"password": "hunter22", "display_name": "Alice"}
        }),
    );
    assert!(status.is_success());
    assert_eq!(body["success"], json!(true));
    assert!(body.get("code").is_none(), "the code never leaks into a response");

    let code = ctx.sender.last_code().await.expect("code was emailed");

    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/verify-code",
        json!({"email": "alice@example.com", "code": code}),
    );
    assert!(status.is_success());
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["account_type"], json!("member"));
    assert_eq!(body["user_data"]["display_name"], json!("Alice"));
    assert!(body["user_data"].get("password").is_none());
    assert_eq!(ctx.identity.len().await, 1);
    assert_eq!(ctx.users.len().await, 1);

    // The record was consumed; replaying the code finds nothing.
    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/verify-code",
        json!({"email": "alice@example.com", "code": code}),
    );
    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
}

#[actix_rt::test]
async fn malformed_email_is_rejected_by_dto_validation() {
    let ctx = build_context();
    let app = test_app!(ctx);

    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/send-verification",
        json!({"email": "not-an-email"}),
    );
    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(ctx.sender.last().await.is_none());
}

#[actix_rt::test]
async fn wrong_code_reports_remaining_attempts_in_the_envelope() {
    let ctx = build_context();
    let app = test_app!(ctx);

    post_json!(
        &app,
        "/api/v1/auth/send-verification",
        json!({"email": "bob@example.com", "user_data": {"password": "hunter22"}}),
    );

    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/verify-code",
        json!({"email": "bob@example.com", "code": "000000"}),
    );
    assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("4 attempt(s) remaining"), "got: {}", error);
}

#[actix_rt::test]
async fn password_reset_for_unknown_address_still_succeeds() {
    let ctx = build_context();
    let app = test_app!(ctx);

    let (status, body) = post_json!(
        &app,
        "/api/v1/auth/send-password-reset",
        json!({"email": "stranger@example.com"}),
    );
    assert!(status.is_success());
    assert_eq!(body["success"], json!(true));
    assert!(ctx.sender.last().await.is_none(), "nothing was actually sent");
}

#[actix_rt::test]
async fn profile_read_and_update_over_http() {
    let ctx = build_context();
    let user_id = Uuid::new_v4();
    ctx.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    let app = test_app!(ctx);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/profile", user_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["email"], json!("alice@example.com"));
    assert_eq!(body["account_type"], json!("member"));

    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}/profile", user_id))
        .set_json(json!({"display_name": "Alice", "location": "Madrid"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["display_name"], json!("Alice"));
    assert_eq!(body["location"], json!("Madrid"));
}

#[actix_rt::test]
async fn social_links_crud_over_http() {
    let ctx = build_context();
    let user_id = Uuid::new_v4();
    ctx.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    let app = test_app!(ctx);

    let (status, body) = post_json!(
        &app,
        &format!("/api/v1/users/{}/social-links", user_id),
        json!({"network": "instagram", "url": "https://instagram.com/alice"}),
    );
    assert!(status.is_success());
    assert_eq!(body["network"], json!("instagram"));

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/social-links", user_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["links"].as_array().unwrap().len(), 1);

    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}/social-links/instagram", user_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/social-links", user_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    let body: Value = test::read_body_json(response).await;
    assert!(body["links"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn promotion_flips_the_account_type() {
    let ctx = build_context();
    let user_id = Uuid::new_v4();
    ctx.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    let app = test_app!(ctx);

    let request = test::TestRequest::post()
        .uri(&format!("/api/v1/users/{}/promote", user_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["account_type"], json!("organizer"));
}
