//! Account flow tests

use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user_profile::UserProfile;
use crate::domain::entities::social_link::SocialLink;
use crate::errors::{CodeError, DomainError};
use crate::repositories::identity::MockIdentityClient;
use crate::repositories::social::SocialLinkRepository;
use crate::repositories::user::UserRepository;

use super::mocks::Harness;

#[tokio::test]
async fn registration_rejects_malformed_email() {
    let h = Harness::new();
    let err = h
        .service
        .request_registration_code("not-an-email", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn registration_code_is_delivered_not_returned() {
    let h = Harness::new();
    h.service
        .request_registration_code(
            "alice@example.com",
            Some(json!({"password": "hunter22", "display_name": "Alice"})),
        )
        .await
        .unwrap();

    let sent = h.sender.last().await.unwrap();
    assert_eq!(sent.recipient, "alice@example.com");
    assert!(h.sender.last_code().await.is_some());
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn delivered_mail_states_the_configured_expiry() {
    let config = lst_shared::config::VerificationConfig {
        code_expiration_minutes: 30,
        ..Default::default()
    };
    let h = Harness::with_config(config);
    h.service
        .request_registration_code("alice@example.com", Some(json!({"password": "hunter22"})))
        .await
        .unwrap();

    let sent = h.sender.last().await.unwrap();
    assert!(sent.message.text_body.contains("expires in 30 minutes"));
}

#[tokio::test]
async fn failed_delivery_leaves_no_orphan_record() {
    let h = Harness::with_failing_sender();
    let err = h
        .service
        .request_registration_code("alice@example.com", Some(json!({"password": "hunter22"})))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Dependency { .. }));
    assert_eq!(h.store.len().await, 0, "no orphaned codes survive a failed send");
}

#[tokio::test]
async fn verified_registration_creates_account_and_consumes_code() {
    let h = Harness::new();
    h.service
        .request_registration_code(
            "alice@example.com",
            Some(json!({"password": "hunter22", "display_name": "Alice"})),
        )
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    let result = h
        .service
        .verify_registration("alice@example.com", &code)
        .await
        .unwrap();

    assert_eq!(result.user_data.get("password"), None, "credentials are scrubbed");
    assert_eq!(result.user_data["display_name"], "Alice");
    assert_eq!(h.identity.len().await, 1);
    assert_eq!(h.users.len().await, 1);

    let profile = h
        .users
        .find_by_id(result.user_id)
        .await
        .unwrap()
        .expect("profile row created");
    assert_eq!(profile.display_name.as_deref(), Some("Alice"));

    // Record was consumed: replaying the code finds nothing.
    let err = h
        .service
        .verify_registration("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Code(CodeError::NotFound)));
}

#[tokio::test]
async fn wrong_code_reports_remaining_attempts() {
    let h = Harness::new();
    h.service
        .request_registration_code("bob@example.com", Some(json!({"password": "hunter22"})))
        .await
        .unwrap();

    let err = h
        .service
        .verify_registration("bob@example.com", "000000")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Code(CodeError::Mismatch { remaining: 4 })
    ));
}

#[tokio::test]
async fn failed_store_action_keeps_the_code_retryable() {
    let h = Harness::with_failing_identity();
    h.service
        .request_registration_code("alice@example.com", Some(json!({"password": "hunter22"})))
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    let err = h
        .service
        .verify_registration("alice@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Dependency { .. }));
    assert_eq!(h.store.len().await, 1, "record survives the failed action");

    // Same code succeeds once the identity service recovers.
    let recovered = h.with_identity(Arc::new(MockIdentityClient::new()));
    recovered
        .verify_registration("alice@example.com", &code)
        .await
        .unwrap();
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn email_change_requires_an_existing_user() {
    let h = Harness::new();
    let err = h
        .service
        .request_email_change("new@example.com", Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn email_change_updates_identity_and_profile() {
    let h = Harness::new();
    let user_id = Uuid::new_v4();
    h.users
        .insert(UserProfile::new(user_id, "old@example.com".to_string()))
        .await;
    h.identity.insert(user_id, "old@example.com", "hunter22").await;

    h.service
        .request_email_change("new@example.com", user_id)
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();
    assert_eq!(
        h.sender.last().await.unwrap().recipient,
        "new@example.com",
        "the code goes to the address being verified"
    );

    let new_email = h
        .service
        .confirm_email_change("new@example.com", &code, user_id)
        .await
        .unwrap();
    assert_eq!(new_email, "new@example.com");
    assert_eq!(h.identity.get(user_id).await.unwrap().email, "new@example.com");
    assert_eq!(
        h.users.find_by_id(user_id).await.unwrap().unwrap().email,
        "new@example.com"
    );
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn password_reset_is_enumeration_resistant() {
    let h = Harness::new();

    h.service
        .request_password_reset("stranger@example.com")
        .await
        .expect("unknown address still reports success");
    assert!(h.sender.last().await.is_none(), "nothing is sent");
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn password_reset_happy_path() {
    let h = Harness::new();
    let user_id = Uuid::new_v4();
    h.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    h.identity.insert(user_id, "alice@example.com", "old-pass").await;

    h.service
        .request_password_reset("alice@example.com")
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    h.service
        .reset_password("alice@example.com", &code, "new-password")
        .await
        .unwrap();
    assert_eq!(h.identity.get(user_id).await.unwrap().password, "new-password");
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn short_password_is_rejected_before_the_code_is_touched() {
    let h = Harness::new();
    let user_id = Uuid::new_v4();
    h.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    h.identity.insert(user_id, "alice@example.com", "old-pass").await;
    h.service
        .request_password_reset("alice@example.com")
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    let err = h
        .service
        .reset_password("alice@example.com", &code, "12345")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    // The attempt budget was not charged for the validation failure.
    h.service
        .reset_password("alice@example.com", &code, "123456")
        .await
        .unwrap();
}

#[tokio::test]
async fn account_deletion_removes_links_profile_and_identity() {
    let h = Harness::new();
    let user_id = Uuid::new_v4();
    h.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    h.identity.insert(user_id, "alice@example.com", "hunter22").await;
    h.social
        .upsert(SocialLink::new(user_id, "instagram", "https://instagram.com/alice"))
        .await
        .unwrap();

    h.service
        .request_account_deletion("alice@example.com", user_id)
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    h.service
        .confirm_account_deletion("alice@example.com", &code, user_id)
        .await
        .unwrap();

    assert_eq!(h.social.len().await, 0);
    assert_eq!(h.users.len().await, 0);
    assert_eq!(h.identity.len().await, 0);
    assert_eq!(h.store.len().await, 0);
}

#[tokio::test]
async fn deletion_proceeds_when_social_cleanup_fails() {
    // Best-effort: a social-store failure is logged, not fatal.
    let h = Harness::new();
    let user_id = Uuid::new_v4();
    h.users
        .insert(UserProfile::new(user_id, "alice@example.com".to_string()))
        .await;
    h.identity.insert(user_id, "alice@example.com", "hunter22").await;

    let service = {
        use crate::repositories::social::MockSocialLinkRepository;
        use crate::services::account::service::AccountService;
        AccountService::new(
            Arc::clone(&h.ledger),
            Arc::clone(&h.sender),
            Arc::clone(&h.users),
            Arc::clone(&h.identity),
            Arc::new(MockSocialLinkRepository::failing()),
        )
    };

    service
        .request_account_deletion("alice@example.com", user_id)
        .await
        .unwrap();
    let code = h.sender.last_code().await.unwrap();

    service
        .confirm_account_deletion("alice@example.com", &code, user_id)
        .await
        .unwrap();
    assert_eq!(h.users.len().await, 0);
    assert_eq!(h.identity.len().await, 0);
}
