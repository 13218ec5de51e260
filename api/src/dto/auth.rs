//! DTOs for the code-verified account flows

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// POST /auth/send-verification
#[derive(Debug, Deserialize, Validate)]
pub struct SendVerificationRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Pending registration fields, held until the code is verified
    pub user_data: Option<serde_json::Value>,
}

/// POST /auth/verify-code
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

/// POST /auth/send-change-email
#[derive(Debug, Deserialize, Validate)]
pub struct SendChangeEmailRequest {
    /// The new address being verified
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub user_id: Uuid,
}

/// POST /auth/verify-change-email
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyChangeEmailRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    pub user_id: Uuid,
}

/// POST /auth/send-password-reset
#[derive(Debug, Deserialize, Validate)]
pub struct SendPasswordResetRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// POST /auth/reset-password
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// POST /auth/send-delete-code
#[derive(Debug, Deserialize, Validate)]
pub struct SendDeleteCodeRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub user_id: Uuid,
}

/// POST /auth/confirm-delete-user
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmDeleteRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,

    pub user_id: Uuid,
}

/// Generic `{message}` success payload
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Success payload for a verified registration
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub account_type: String,
    pub user_id: Uuid,
    pub user_data: serde_json::Value,
}

/// Success payload for a confirmed email change
#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeEmailResponse {
    pub new_email: String,
}
