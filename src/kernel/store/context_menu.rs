use crate::error::DesktopError;
use crate::kernel::state::{ContextMenuItem, ContextMenuState, ContextMenuTarget};
use crate::kernel::Action;
use crate::models::ItemKind;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ContextMenuOpen { target, pos } => {
                let invalid = match &target {
                    ContextMenuTarget::Item(id) if !self.state.fs.contains(id) => {
                        Some(DesktopError::NotFound(id.clone()))
                    }
                    ContextMenuTarget::Background { folder: Some(id) } => {
                        match self.state.fs.children_of(id) {
                            Ok(_) => None,
                            Err(e) => Some(e),
                        }
                    }
                    _ => None,
                };
                if let Some(e) = invalid {
                    return self.reject(e);
                }

                let next = ContextMenuState {
                    visible: true,
                    anchor: pos,
                    items: ContextMenuItem::for_target(&target),
                    target: Some(target),
                };
                let changed = next != self.state.context_menu;
                self.state.context_menu = next;
                DispatchResult::changed(changed)
            }
            Action::ContextMenuClose => {
                if !self.state.context_menu.visible {
                    return DispatchResult::unchanged();
                }
                self.state.context_menu = ContextMenuState::default();
                DispatchResult::changed(true)
            }
            Action::ContextMenuChoose { item, name } => {
                let menu = std::mem::take(&mut self.state.context_menu);
                let Some(target) = menu.target.filter(|_| menu.visible) else {
                    return DispatchResult::unchanged();
                };
                if !menu.items.contains(&item) {
                    return DispatchResult::changed(true);
                }

                let follow_up = match (item, target, name) {
                    (ContextMenuItem::NewFolder, ContextMenuTarget::Background { folder }, Some(name)) => {
                        Some(Action::CreateItem {
                            kind: ItemKind::Folder,
                            name,
                            parent: folder,
                        })
                    }
                    (ContextMenuItem::NewTextFile, ContextMenuTarget::Background { folder }, Some(name)) => {
                        Some(Action::CreateItem {
                            kind: ItemKind::File,
                            name,
                            parent: folder,
                        })
                    }
                    (ContextMenuItem::Rename, ContextMenuTarget::Item(id), Some(name)) => {
                        Some(Action::RenameItem { id, name })
                    }
                    (ContextMenuItem::Delete, ContextMenuTarget::Item(id), _) => {
                        Some(Action::DeleteItem { id })
                    }
                    _ => None,
                };

                match follow_up {
                    Some(action) => {
                        let mut result = self.dispatch(action);
                        result.state_changed = true;
                        result
                    }
                    None => DispatchResult::changed(true),
                }
            }
            _ => DispatchResult::unchanged(),
        }
    }
}
