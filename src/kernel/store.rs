use crate::error::DesktopError;

use super::{Action, AppState, Effect};

mod context_menu;
mod file_system;
mod pointer;
mod windows;

#[derive(Debug)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn persist() -> Self {
        Self {
            effects: vec![Effect::PersistFileSystem],
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.state.last_error = None;
        match action {
            Action::CreateItem { .. }
            | Action::CreateAtPath { .. }
            | Action::RenameItem { .. }
            | Action::DeleteItem { .. }
            | Action::WriteContent { .. }
            | Action::NavigateTo { .. }
            | Action::NavigateUp => self.reduce_file_system_action(action),
            Action::ActivateItem { .. }
            | Action::OpenWindow { .. }
            | Action::CloseWindow { .. }
            | Action::MinimizeWindow { .. }
            | Action::FocusWindow { .. }
            | Action::ToggleMaximize { .. }
            | Action::TaskbarClick { .. }
            | Action::SetViewport { .. } => self.reduce_window_action(action),
            Action::PointerDown { .. } | Action::PointerMove { .. } | Action::PointerUp => {
                self.reduce_pointer_action(action)
            }
            Action::ContextMenuOpen { .. }
            | Action::ContextMenuClose
            | Action::ContextMenuChoose { .. } => self.reduce_context_menu_action(action),
        }
    }

    /// A rejected command leaves state untouched; the error is kept for the UI.
    fn reject(&mut self, error: DesktopError) -> DispatchResult {
        tracing::warn!(error = %error, "command rejected");
        self.state.last_error = Some(error);
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
