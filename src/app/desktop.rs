//! Runtime around the kernel store: loads the blob at startup, dispatches
//! actions and carries out the effects they return.

use crate::error::DesktopError;
use crate::kernel::services::ports::{BlobStorage, DesktopConfig};
use crate::kernel::{load_state, save_state, Action, AppState, Effect, LoadSource, Store};

pub struct Desktop<S: BlobStorage> {
    store: Store,
    storage: S,
    load_source: LoadSource,
    last_persist_error: Option<DesktopError>,
}

impl<S: BlobStorage> Desktop<S> {
    pub fn new(storage: S, config: DesktopConfig) -> Self {
        let loaded = load_state(&storage, &config.storage_key);
        tracing::info!(
            source = ?loaded.source,
            items = loaded.state.items.len(),
            "desktop loaded"
        );
        Self {
            store: Store::new(AppState::new(loaded.state, config)),
            storage,
            load_source: loaded.source,
            last_persist_error: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_source(&self) -> &LoadSource {
        &self.load_source
    }

    pub fn last_persist_error(&self) -> Option<&DesktopError> {
        self.last_persist_error.as_ref()
    }

    /// Returns whether anything visible changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistFileSystem => {
                let state = self.store.state();
                match save_state(&mut self.storage, &state.config.storage_key, state.fs.state()) {
                    Ok(()) => self.last_persist_error = None,
                    Err(e) => {
                        tracing::error!(error = %e, "persist file system failed");
                        self.last_persist_error = Some(e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/desktop.rs"]
mod tests;
