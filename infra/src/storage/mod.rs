//! Managed object-storage client for avatar uploads

mod avatar;

pub use avatar::{HttpStorageClient, StorageServiceConfig};
