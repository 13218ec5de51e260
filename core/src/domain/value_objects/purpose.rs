//! Verification purpose and its key-prefix encoding.
//!
//! One ledger serves four independent flows. The purpose is encoded as a
//! prefix on the storage key so concurrent flows for the same email never
//! collide; registration uses the bare address as its key.

use serde::{Deserialize, Serialize};

/// The flow a verification code was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// New account registration; bare email key
    Registration,
    /// Email address change; `EMAIL:` prefix
    EmailChange,
    /// Password reset; `RESET:` prefix
    PasswordReset,
    /// Account deletion; `DELETE:` prefix
    AccountDeletion,
}

impl Purpose {
    /// Key prefix for this purpose
    pub fn prefix(&self) -> &'static str {
        match self {
            Purpose::Registration => "",
            Purpose::EmailChange => "EMAIL:",
            Purpose::PasswordReset => "RESET:",
            Purpose::AccountDeletion => "DELETE:",
        }
    }

    /// Ledger storage key for this purpose and email
    pub fn key(&self, email: &str) -> String {
        format!("{}{}", self.prefix(), email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_uses_bare_email() {
        assert_eq!(Purpose::Registration.key("alice@example.com"), "alice@example.com");
    }

    #[test]
    fn other_purposes_are_prefixed() {
        assert_eq!(Purpose::EmailChange.key("a@b.cc"), "EMAIL:a@b.cc");
        assert_eq!(Purpose::PasswordReset.key("a@b.cc"), "RESET:a@b.cc");
        assert_eq!(Purpose::AccountDeletion.key("a@b.cc"), "DELETE:a@b.cc");
    }

    #[test]
    fn purposes_never_share_a_key() {
        let email = "same@example.com";
        let keys: std::collections::HashSet<String> = [
            Purpose::Registration,
            Purpose::EmailChange,
            Purpose::PasswordReset,
            Purpose::AccountDeletion,
        ]
        .iter()
        .map(|p| p.key(email))
        .collect();
        assert_eq!(keys.len(), 4);
    }
}
