//! Result types for ledger operations

use crate::errors::CodeError;

/// Outcome of checking a supplied code against the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// No live record for the key: never issued, already consumed, or
    /// already swept
    NotFound,

    /// Record existed but had expired; it has been deleted
    Expired,

    /// Wrong code; the attempt counter was incremented
    Mismatch {
        /// Failed comparisons still allowed before destruction
        remaining: u32,
    },

    /// Wrong code and the attempt budget is now spent; the record has
    /// been deleted
    AttemptsExhausted,

    /// Correct code. The record is NOT deleted here: the caller deletes
    /// it explicitly once the dependent action has succeeded, so a
    /// failed action can be retried with the same code.
    Valid {
        /// Purpose-specific context stored at issue time
        payload: serde_json::Value,
    },
}

impl CheckOutcome {
    /// Convert a failed outcome into its error; `Valid` yields the payload
    pub fn into_payload(self) -> Result<serde_json::Value, CodeError> {
        match self {
            CheckOutcome::Valid { payload } => Ok(payload),
            CheckOutcome::NotFound => Err(CodeError::NotFound),
            CheckOutcome::Expired => Err(CodeError::Expired),
            CheckOutcome::Mismatch { remaining } => Err(CodeError::Mismatch { remaining }),
            CheckOutcome::AttemptsExhausted => Err(CodeError::AttemptsExhausted),
        }
    }
}
