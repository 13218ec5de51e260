//! Managed auth-identity subsystem client

mod client;

pub use client::{HttpIdentityClient, IdentityServiceConfig};
