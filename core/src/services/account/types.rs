//! Result types for account flows

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user_profile::AccountType;

/// Outcome of a verified registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResult {
    /// Account type of the freshly created user
    pub account_type: AccountType,

    /// New account id
    pub user_id: Uuid,

    /// The pending registration fields echoed back, credentials removed
    pub user_data: serde_json::Value,
}
