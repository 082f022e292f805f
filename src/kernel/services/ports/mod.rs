//! Service ports: traits + data contracts.

pub mod config;
pub mod storage;

pub use config::{DesktopConfig, DEFAULT_STORAGE_KEY};
pub use storage::BlobStorage;
