//! Repository traits for external collaborators
//!
//! Each module defines an async trait implemented in the infrastructure
//! crate, plus an in-memory mock used by service tests.

pub mod identity;
pub mod social;
pub mod storage;
pub mod user;

pub use identity::IdentityClient;
pub use social::SocialLinkRepository;
pub use storage::StorageClient;
pub use user::UserRepository;
