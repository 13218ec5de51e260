//! Domain entities

pub mod social_link;
pub mod user_profile;
pub mod verification_record;

pub use social_link::SocialLink;
pub use user_profile::{AccountType, ProfileUpdate, UserProfile};
pub use verification_record::VerificationRecord;
