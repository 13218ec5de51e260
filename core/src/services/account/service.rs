//! Account service implementation

use std::sync::Arc;

use serde_json::json;
use tracing;
use uuid::Uuid;

use lst_shared::utils::validation::{is_valid_email, is_valid_password, MIN_PASSWORD_LENGTH};

use crate::domain::entities::user_profile::UserProfile;
use crate::domain::value_objects::purpose::Purpose;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{IdentityClient, SocialLinkRepository, UserRepository};
use crate::services::email::{EmailMessage, EmailSender};
use crate::services::ledger::{Ledger, LedgerStore};

use super::types::RegistrationResult;

/// Orchestrates the four code-verified account flows.
///
/// Consume-on-success is caller-driven: the ledger record is deleted only
/// after the dependent store action has succeeded, so a failed action can
/// be retried with the same code. Consume-on-failure (expiry, exhaustion)
/// is the ledger's own job.
pub struct AccountService<S, E, U, I, SL>
where
    S: LedgerStore,
    E: EmailSender,
    U: UserRepository,
    I: IdentityClient,
    SL: SocialLinkRepository,
{
    ledger: Arc<Ledger<S>>,
    email_sender: Arc<E>,
    user_repository: Arc<U>,
    identity_client: Arc<I>,
    social_repository: Arc<SL>,
}

impl<S, E, U, I, SL> AccountService<S, E, U, I, SL>
where
    S: LedgerStore,
    E: EmailSender,
    U: UserRepository,
    I: IdentityClient,
    SL: SocialLinkRepository,
{
    pub fn new(
        ledger: Arc<Ledger<S>>,
        email_sender: Arc<E>,
        user_repository: Arc<U>,
        identity_client: Arc<I>,
        social_repository: Arc<SL>,
    ) -> Self {
        Self {
            ledger,
            email_sender,
            user_repository,
            identity_client,
            social_repository,
        }
    }

    /// Issue a code and deliver it; on delivery failure the just-issued
    /// record is deleted so no orphaned codes survive a failed send.
    async fn issue_and_send(
        &self,
        purpose: Purpose,
        email: &str,
        payload: serde_json::Value,
    ) -> DomainResult<()> {
        let code = self.ledger.issue(purpose, email, payload).await?;
        let message =
            EmailMessage::verification(purpose, &code, self.ledger.code_expiration_minutes());

        match self.email_sender.send(email, &message).await {
            Ok(message_id) => {
                tracing::info!(
                    email = email,
                    purpose = ?purpose,
                    message_id = %message_id,
                    event = "code_delivered",
                    "Verification email delivered"
                );
                Ok(())
            }
            Err(send_error) => {
                if let Err(cleanup_error) = self.ledger.delete(purpose, email).await {
                    tracing::error!(
                        email = email,
                        error = %cleanup_error,
                        "Failed to clean up verification record after delivery failure"
                    );
                }
                tracing::error!(
                    email = email,
                    purpose = ?purpose,
                    error = %send_error,
                    event = "delivery_failed",
                    "Verification email delivery failed"
                );
                Err(send_error)
            }
        }
    }

    /// Run `check` and convert any non-valid outcome into its error
    async fn check_code(
        &self,
        purpose: Purpose,
        email: &str,
        code: &str,
    ) -> DomainResult<serde_json::Value> {
        let outcome = self.ledger.check(purpose, email, code).await?;
        outcome.into_payload().map_err(DomainError::from)
    }

    // --- registration ---

    /// Send a registration code, holding the pending fields in the
    /// record payload until the code is verified
    pub async fn request_registration_code(
        &self,
        email: &str,
        user_data: Option<serde_json::Value>,
    ) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("Invalid email address"));
        }

        let payload = user_data.unwrap_or_else(|| json!({}));
        self.issue_and_send(Purpose::Registration, email, payload).await
    }

    /// Verify a registration code and create the account
    pub async fn verify_registration(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<RegistrationResult> {
        let payload = self.check_code(Purpose::Registration, email, code).await?;

        let password = payload
            .get("password")
            .and_then(|v| v.as_str())
            .ok_or_else(|| DomainError::validation("Registration data is missing a password"))?;
        if !is_valid_password(password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        // Dependent action: create credentials, then the profile row. A
        // failure here leaves the record intact so the same code can be
        // retried.
        let user_id = self.identity_client.create_account(email, password).await?;

        let mut profile = UserProfile::new(user_id, email.to_string());
        if let Some(display_name) = payload.get("display_name").and_then(|v| v.as_str()) {
            profile.display_name = Some(display_name.to_string());
        }
        let profile = self.user_repository.create(profile).await?;

        // Explicit consume, only now that the action has succeeded.
        self.ledger.delete(Purpose::Registration, email).await?;

        tracing::info!(
            email = email,
            user_id = %user_id,
            event = "registration_complete",
            "Account created"
        );

        let mut user_data = payload;
        if let Some(map) = user_data.as_object_mut() {
            map.remove("password");
        }

        Ok(RegistrationResult {
            account_type: profile.account_type,
            user_id,
            user_data,
        })
    }

    // --- email change ---

    /// Send a change-email code to the new address
    pub async fn request_email_change(&self, new_email: &str, user_id: Uuid) -> DomainResult<()> {
        if !is_valid_email(new_email) {
            return Err(DomainError::validation("Invalid email address"));
        }
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::validation("User not found"));
        }

        self.issue_and_send(Purpose::EmailChange, new_email, json!({ "user_id": user_id }))
            .await
    }

    /// Verify a change-email code and apply the new address
    pub async fn confirm_email_change(
        &self,
        new_email: &str,
        code: &str,
        user_id: Uuid,
    ) -> DomainResult<String> {
        let payload = self.check_code(Purpose::EmailChange, new_email, code).await?;
        let target = Self::payload_user_id(&payload).unwrap_or(user_id);

        self.identity_client.update_email(target, new_email).await?;
        self.user_repository.update_email(target, new_email).await?;

        self.ledger.delete(Purpose::EmailChange, new_email).await?;

        tracing::info!(
            user_id = %target,
            event = "email_changed",
            "Email address updated"
        );
        Ok(new_email.to_string())
    }

    // --- password reset ---

    /// Send a password-reset code.
    ///
    /// Enumeration-resistant: an unknown address reports success and
    /// sends nothing.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("Invalid email address"));
        }

        let Some(profile) = self.user_repository.find_by_email(email).await? else {
            tracing::debug!(
                email = email,
                event = "reset_unknown_email",
                "Password reset requested for unknown address; reporting success"
            );
            return Ok(());
        };

        self.issue_and_send(
            Purpose::PasswordReset,
            email,
            json!({ "user_id": profile.id }),
        )
        .await
    }

    /// Verify a reset code and set the new password
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if !is_valid_password(new_password) {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let payload = self.check_code(Purpose::PasswordReset, email, code).await?;
        let user_id = Self::payload_user_id(&payload)
            .ok_or_else(|| DomainError::validation("Reset record is missing the account id"))?;

        self.identity_client.update_password(user_id, new_password).await?;

        self.ledger.delete(Purpose::PasswordReset, email).await?;

        tracing::info!(user_id = %user_id, event = "password_reset", "Password updated");
        Ok(())
    }

    // --- account deletion ---

    /// Send an account-deletion code
    pub async fn request_account_deletion(&self, email: &str, user_id: Uuid) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(DomainError::validation("Invalid email address"));
        }

        self.issue_and_send(
            Purpose::AccountDeletion,
            email,
            json!({ "user_id": user_id }),
        )
        .await
    }

    /// Verify a deletion code and remove the account.
    ///
    /// Best-effort, non-atomic: social links first (failure logged, not
    /// fatal), then the profile row, then the auth identity, in that
    /// order. A failure partway leaves prior steps committed; there is
    /// no compensating rollback.
    pub async fn confirm_account_deletion(
        &self,
        email: &str,
        code: &str,
        user_id: Uuid,
    ) -> DomainResult<()> {
        let payload = self.check_code(Purpose::AccountDeletion, email, code).await?;
        let target = Self::payload_user_id(&payload).unwrap_or(user_id);

        match self.social_repository.delete_for_user(target).await {
            Ok(removed) => {
                tracing::info!(
                    user_id = %target,
                    removed = removed,
                    "Removed social links for account deletion"
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %target,
                    error = %e,
                    "Failed to remove social links; continuing with account deletion"
                );
            }
        }

        self.user_repository.delete(target).await?;
        tracing::info!(user_id = %target, "Profile row deleted");

        self.identity_client.delete_account(target).await?;
        tracing::info!(user_id = %target, "Auth identity deleted");

        self.ledger.delete(Purpose::AccountDeletion, email).await?;

        tracing::info!(
            user_id = %target,
            event = "account_deleted",
            "Account deletion complete"
        );
        Ok(())
    }

    fn payload_user_id(payload: &serde_json::Value) -> Option<Uuid> {
        payload
            .get("user_id")
            .and_then(|v| v.as_str())
            .and_then(|s| Uuid::parse_str(s).ok())
    }
}
