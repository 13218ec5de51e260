mod client;
mod mock;

pub use client::StorageClient;
pub use mock::MockStorageClient;
