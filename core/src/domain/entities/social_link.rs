//! Social-network link rows attached to a profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A social-network link shown on a user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Row id
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Network name, e.g. "instagram", "x", "mastodon"
    pub network: String,

    /// Full profile URL on that network
    pub url: String,

    /// Row creation timestamp
    pub created_at: DateTime<Utc>,
}

impl SocialLink {
    pub fn new(user_id: Uuid, network: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            network: network.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}
