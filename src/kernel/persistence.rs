//! Reading and writing the file-system blob.
//!
//! The whole `FileSystemState` lives under one storage key. A missing blob and
//! an unreadable blob both fall back to the bundled default tree; the caller
//! learns which happened through [`LoadSource`].

use crate::error::{DesktopError, Result};
use crate::kernel::services::ports::BlobStorage;
use crate::models::FileSystemState;

const DEFAULT_FILE_SYSTEM: &str = include_str!("../../assets/default_file_system.json");

#[derive(Debug)]
pub enum LoadSource {
    Saved,
    Default,
    Corrupt(DesktopError),
}

#[derive(Debug)]
pub struct Loaded {
    pub state: FileSystemState,
    pub source: LoadSource,
}

pub fn default_state() -> FileSystemState {
    match FileSystemState::from_blob(DEFAULT_FILE_SYSTEM) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "bundled default file system is invalid");
            FileSystemState::default()
        }
    }
}

pub fn load_state(storage: &dyn BlobStorage, key: &str) -> Loaded {
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            tracing::info!(key, "no saved file system, using defaults");
            return Loaded {
                state: default_state(),
                source: LoadSource::Default,
            };
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "read saved file system failed, using defaults");
            return Loaded {
                state: default_state(),
                source: LoadSource::Corrupt(DesktopError::Io(e)),
            };
        }
    };

    match FileSystemState::from_blob(&blob) {
        Ok(state) => Loaded {
            state,
            source: LoadSource::Saved,
        },
        Err(e) => {
            tracing::warn!(key, error = %e, "saved file system is corrupt, using defaults");
            Loaded {
                state: default_state(),
                source: LoadSource::Corrupt(e.into()),
            }
        }
    }
}

pub fn save_state(storage: &mut dyn BlobStorage, key: &str, state: &FileSystemState) -> Result<()> {
    let blob = state.to_blob()?;
    storage.set(key, &blob)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/persistence.rs"]
mod tests;
