//! User profile entity, the core account row proxied to the managed store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account type for a Listado user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Regular attendee account
    Member,
    /// Privileged account allowed to publish listings
    Organizer,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Member => "member",
            AccountType::Organizer => "organizer",
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(AccountType::Member),
            "organizer" => Ok(AccountType::Organizer),
            other => Err(format!("Unknown account type: {}", other)),
        }
    }
}

/// Profile row for a registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account id, shared with the auth-identity subsystem
    pub id: Uuid,

    /// Verified email address
    pub email: String,

    /// Public display name
    pub display_name: Option<String>,

    /// Free-form biography
    pub bio: Option<String>,

    /// Personal or organisation website
    pub website: Option<String>,

    /// City / region shown on the profile
    pub location: Option<String>,

    /// Public URL of the uploaded avatar, if any
    pub avatar_url: Option<String>,

    /// Account type (member or organizer)
    pub account_type: AccountType,

    /// Row creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh member profile for a just-verified registration
    pub fn new(id: Uuid, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            display_name: None,
            bio: None,
            website: None,
            location: None,
            avatar_url: None,
            account_type: AccountType::Member,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of profile fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

impl ProfileUpdate {
    /// Whether the update carries any change at all
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.bio.is_none()
            && self.website.is_none()
            && self.location.is_none()
    }

    /// Apply the update onto an existing profile
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(display_name) = &self.display_name {
            profile.display_name = Some(display_name.clone());
        }
        if let Some(bio) = &self.bio {
            profile.bio = Some(bio.clone());
        }
        if let Some(website) = &self.website {
            profile.website = Some(website.clone());
        }
        if let Some(location) = &self.location {
            profile.location = Some(location.clone());
        }
        profile.updated_at = Utc::now();
    }
}
