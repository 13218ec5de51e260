//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Simple `local@domain.tld` shape check; deliverability is the mail
/// relay's problem, not ours.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Check that an email address matches the `local@domain.tld` pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a password meets the minimum length requirement
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}
