mod client;
mod mock;

pub use client::IdentityClient;
pub use mock::MockIdentityClient;
