//! Profile passthrough operations

mod service;

pub use service::{ProfileService, MAX_AVATAR_BYTES};
