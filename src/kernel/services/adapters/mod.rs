//! Service adapters: OS specific implementations.

pub mod config;
pub mod paths;
pub mod storage;

pub use config::{ensure_config_file, load_config, CONFIG_FILE};
pub use paths::{default_data_dir, ensure_log_dir, log_dir, storage_dir};
pub use storage::{FileStorage, MemoryStorage};
