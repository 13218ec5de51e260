//! DTOs for the profile passthrough endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use lst_core::domain::entities::social_link::SocialLink;
use lst_core::domain::entities::user_profile::{ProfileUpdate, UserProfile};

/// PUT /users/{user_id}/profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 80, message = "Display name is too long"))]
    pub display_name: Option<String>,

    #[validate(length(max = 1000, message = "Bio is too long"))]
    pub bio: Option<String>,

    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,

    #[validate(length(max = 120, message = "Location is too long"))]
    pub location: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            display_name: request.display_name,
            bio: request.bio,
            website: request.website,
            location: request.location,
        }
    }
}

/// Profile row as returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub account_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            display_name: profile.display_name,
            bio: profile.bio,
            website: profile.website,
            location: profile.location,
            avatar_url: profile.avatar_url,
            account_type: profile.account_type.as_str().to_string(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// POST /users/{user_id}/social-links
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertSocialLinkRequest {
    #[validate(length(min = 1, max = 40, message = "Network name is required"))]
    pub network: String,

    #[validate(url(message = "Link must be a valid URL"))]
    pub url: String,
}

/// One social link row
#[derive(Debug, Serialize, Deserialize)]
pub struct SocialLinkResponse {
    pub network: String,
    pub url: String,
}

impl From<SocialLink> for SocialLinkResponse {
    fn from(link: SocialLink) -> Self {
        Self {
            network: link.network,
            url: link.url,
        }
    }
}

/// GET /users/{user_id}/social-links
#[derive(Debug, Serialize, Deserialize)]
pub struct SocialLinksResponse {
    pub links: Vec<SocialLinkResponse>,
}

/// POST /users/{user_id}/avatar
#[derive(Debug, Serialize, Deserialize)]
pub struct AvatarResponse {
    pub public_url: String,
}

/// POST /users/{user_id}/promote
#[derive(Debug, Serialize, Deserialize)]
pub struct PromoteResponse {
    pub account_type: String,
}
