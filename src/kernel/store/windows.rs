use crate::error::DesktopError;
use crate::kernel::Action;
use crate::models::Bounds;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_window_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ActivateItem { id } => {
                let Some(item) = self.state.fs.find(&id) else {
                    return self.reject(DesktopError::NotFound(id));
                };
                if !item.is_folder() {
                    tracing::debug!(id = %id, "file activated, nothing to open");
                    return DispatchResult::unchanged();
                }
                self.reduce_window_action(Action::OpenWindow { folder: id })
            }
            Action::OpenWindow { folder } => {
                let bounds =
                    Bounds::centered_in(self.state.config.viewport(), self.state.config.window_scale);
                let opened = match self.state.fs.find(&folder) {
                    Some(item) => self.state.windows.open(item, bounds),
                    None => Err(DesktopError::NotFound(folder)),
                };
                match opened {
                    Ok(_) => DispatchResult::changed(true),
                    Err(e) => self.reject(e),
                }
            }
            Action::CloseWindow { window } => {
                self.state.gesture.cancel_for(&window);
                DispatchResult::changed(self.state.windows.close(&window))
            }
            Action::MinimizeWindow { window } => {
                let toggled = self.state.windows.minimize(&window);
                let hidden = self
                    .state
                    .windows
                    .get(&window)
                    .is_some_and(|w| w.is_minimized);
                if hidden {
                    self.state.gesture.cancel_for(&window);
                }
                DispatchResult::changed(toggled)
            }
            Action::FocusWindow { window } | Action::TaskbarClick { window } => {
                DispatchResult::changed(self.state.windows.focus(&window))
            }
            Action::ToggleMaximize { window } => {
                self.state.gesture.cancel_for(&window);
                let viewport = self.state.config.viewport();
                DispatchResult::changed(self.state.windows.toggle_maximize(&window, viewport))
            }
            Action::SetViewport { size } => {
                if size == self.state.config.viewport() {
                    return DispatchResult::unchanged();
                }
                self.state.config.viewport_width = size.width;
                self.state.config.viewport_height = size.height;
                self.state.windows.fit_maximized(size);
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
