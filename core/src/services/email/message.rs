//! Rendered verification messages, one template per purpose.

use crate::domain::value_objects::purpose::Purpose;

/// A rendered email, ready for the sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl EmailMessage {
    /// Render the verification message for a purpose and code.
    ///
    /// `expires_minutes` is the configured code lifetime, so the body
    /// never promises an expiry the ledger does not enforce.
    pub fn verification(purpose: Purpose, code: &str, expires_minutes: i64) -> Self {
        let (subject, headline, action) = match purpose {
            Purpose::Registration => (
                "Verify your Listado account",
                "Welcome to Listado!",
                "finish creating your account",
            ),
            Purpose::EmailChange => (
                "Confirm your new email address",
                "Email change requested",
                "confirm your new email address",
            ),
            Purpose::PasswordReset => (
                "Reset your Listado password",
                "Password reset requested",
                "reset your password",
            ),
            Purpose::AccountDeletion => (
                "Confirm account deletion",
                "Account deletion requested",
                "permanently delete your account",
            ),
        };

        let html_body = format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; padding: 20px; color: #333;">
    <h2>{headline}</h2>
    <p>Use this code to {action}:</p>
    <p style="font-size: 32px; letter-spacing: 6px; font-weight: bold; margin: 24px 0;">{code}</p>
    <p style="color: #666; font-size: 14px;">
        The code expires in {expires_minutes} minutes.<br>
        If you did not request this, you can safely ignore this email.
    </p>
</body>
</html>"#
        );

        let text_body = format!(
            "{headline}\n\nUse this code to {action}: {code}\n\nThe code expires in {expires_minutes} minutes.\nIf you did not request this, you can safely ignore this email.\n"
        );

        Self {
            subject: subject.to_string(),
            html_body,
            text_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_the_code_in_both_bodies() {
        let message = EmailMessage::verification(Purpose::Registration, "123456", 15);
        assert!(message.html_body.contains("123456"));
        assert!(message.text_body.contains("123456"));
        assert!(!message.subject.contains("123456"), "code never leaks into the subject");
    }

    #[test]
    fn each_purpose_has_a_distinct_subject() {
        let subjects: std::collections::HashSet<String> = [
            Purpose::Registration,
            Purpose::EmailChange,
            Purpose::PasswordReset,
            Purpose::AccountDeletion,
        ]
        .iter()
        .map(|p| EmailMessage::verification(*p, "654321", 15).subject)
        .collect();
        assert_eq!(subjects.len(), 4);
    }

    #[test]
    fn body_states_the_configured_expiry() {
        let message = EmailMessage::verification(Purpose::PasswordReset, "123456", 30);
        assert!(message.text_body.contains("expires in 30 minutes"));
        assert!(message.html_body.contains("expires in 30 minutes"));
        assert!(!message.text_body.contains("15 minutes"));
    }
}
