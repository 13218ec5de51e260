//! Verification record entity for email-based verification flows.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of failed comparisons before the record is destroyed
pub const MAX_ATTEMPTS: u32 = 5;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (15 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 15;

/// A live verification code record, keyed by the identity being verified.
///
/// The key is a bare email address for registration, or `PURPOSE:email`
/// for the other flows, so unrelated flows for the same address never
/// collide. At most one live record exists per key; issuing a new code
/// overwrites the old record outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Identity under which the record is stored
    pub key: String,

    /// The 6-digit code the user must echo back
    pub code: String,

    /// Count of failed comparisons since creation
    pub attempts: u32,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp at/after which the record is invalid
    pub expires_at: DateTime<Utc>,

    /// Purpose-specific context: pending registration fields, or the
    /// target account id for reset/delete flows
    pub payload: serde_json::Value,
}

impl VerificationRecord {
    /// Create a new record with a fresh random code and default expiry
    pub fn new(key: String, payload: serde_json::Value, now: DateTime<Utc>) -> Self {
        Self::with_expiration(key, payload, now, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Create a new record with a custom expiry, in minutes from `now`
    pub fn with_expiration(
        key: String,
        payload: serde_json::Value,
        now: DateTime<Utc>,
        expiration_minutes: i64,
    ) -> Self {
        Self {
            key,
            code: Self::generate_code(),
            attempts: 0,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            payload,
        }
    }

    /// Generate a uniform-random 6-digit code in 100000..=999999.
    ///
    /// The lower bound guarantees no leading zero is ever produced.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(100_000..=1_000_000 - 1);
        code.to_string()
    }

    /// Whether the record is invalid at the given instant.
    ///
    /// Expiry is inclusive: a record is dead at exactly `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Record one failed comparison
    pub fn register_failure(&mut self) {
        self.attempts += 1;
    }

    /// Whether the attempt budget is spent
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Failed comparisons still allowed before destruction
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_record_starts_clean() {
        let now = Utc::now();
        let record = VerificationRecord::new("alice@example.com".to_string(), json!({}), now);

        assert_eq!(record.key, "alice@example.com");
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert_eq!(record.attempts, 0);
        assert_eq!(record.created_at, now);
        assert_eq!(record.expires_at, now + Duration::minutes(DEFAULT_EXPIRATION_MINUTES));
        assert!(!record.is_expired(now));
    }

    #[test]
    fn generated_codes_never_have_leading_zero() {
        for _ in 0..1000 {
            let code = VerificationRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn codes_vary_across_generations() {
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| VerificationRecord::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        let record = VerificationRecord::with_expiration(
            "alice@example.com".to_string(),
            json!({}),
            now,
            15,
        );

        assert!(!record.is_expired(record.expires_at - Duration::seconds(1)));
        assert!(record.is_expired(record.expires_at));
        assert!(record.is_expired(record.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn attempts_count_down_to_exhaustion() {
        let now = Utc::now();
        let mut record = VerificationRecord::new("bob@example.com".to_string(), json!({}), now);

        assert_eq!(record.remaining_attempts(), MAX_ATTEMPTS);
        for expected_remaining in (0..MAX_ATTEMPTS).rev() {
            record.register_failure();
            assert_eq!(record.remaining_attempts(), expected_remaining);
        }
        assert!(record.attempts_exhausted());
    }

    #[test]
    fn payload_round_trips_through_serde() {
        let now = Utc::now();
        let record = VerificationRecord::new(
            "carol@example.com".to_string(),
            json!({"display_name": "Carol", "password": "hunter22"}),
            now,
        );

        let serialized = serde_json::to_string(&record).unwrap();
        let restored: VerificationRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(record, restored);
        assert_eq!(restored.payload["display_name"], "Carol");
    }
}
