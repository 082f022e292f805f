use crate::kernel::state::ContextMenuTarget;
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_file_system_action(&mut self, action: Action) -> DispatchResult {
        let outcome = match action {
            Action::CreateItem { kind, name, parent } => self
                .state
                .fs
                .create_in(kind, &name, parent.as_ref())
                .map(|_| ()),
            Action::CreateAtPath {
                kind,
                name,
                parent_path,
            } => self
                .state
                .fs
                .create(kind, &name, &parent_path)
                .map(|_| ()),
            Action::RenameItem { id, name } => match self.state.fs.rename(&id, &name) {
                Ok(false) => return DispatchResult::unchanged(),
                other => other.map(|_| ()),
            },
            Action::DeleteItem { id } => self.state.fs.delete(&id).map(|_| self.after_delete()),
            Action::WriteContent { id, content } => self.state.fs.write_content(&id, &content),
            Action::NavigateTo { folder } => self.state.fs.navigate_to(&folder),
            Action::NavigateUp => {
                if !self.state.fs.navigate_up() {
                    return DispatchResult::unchanged();
                }
                Ok(())
            }
            _ => return DispatchResult::unchanged(),
        };

        match outcome {
            Ok(()) => DispatchResult::persist(),
            Err(e) => self.reject(e),
        }
    }

    /// Windows showing a folder that no longer exists are closed, along with any
    /// gesture or context menu that pointed into the removed subtree.
    fn after_delete(&mut self) {
        let closed = self.state.windows.close_missing(&self.state.fs);
        for window in &closed {
            self.state.gesture.cancel_for(window);
        }
        if !closed.is_empty() {
            tracing::debug!(count = closed.len(), "closed windows of deleted folders");
        }

        let menu_target_gone = match &self.state.context_menu.target {
            Some(ContextMenuTarget::Item(id)) => !self.state.fs.contains(id),
            Some(ContextMenuTarget::Background { folder: Some(id) }) => !self.state.fs.contains(id),
            _ => false,
        };
        if menu_target_gone {
            self.state.context_menu = Default::default();
        }
    }
}
