mod mock;
mod repository;

pub use mock::MockSocialLinkRepository;
pub use repository::SocialLinkRepository;
