//! In-memory virtual file system.
//!
//! Mutations rebuild the affected levels of the tree from owned values instead
//! of editing children while iterating them. Ids are unique across the whole
//! tree; `ids` mirrors every id currently present.

use rustc_hash::FxHashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{DesktopError, Result};
use crate::models::{FileSystemState, Item, ItemId, ItemKind};

pub struct FileSystemStore {
    state: FileSystemState,
    ids: FxHashSet<ItemId>,
    last_stamp: u64,
}

impl FileSystemStore {
    pub fn new(state: FileSystemState) -> Self {
        let mut ids = FxHashSet::default();
        let mut duplicates = 0usize;
        state.for_each_item(|item| {
            if !ids.insert(item.id.clone()) {
                duplicates += 1;
            }
        });
        if duplicates > 0 {
            tracing::warn!(duplicates, "file system contains duplicate item ids");
        }

        Self {
            state,
            ids,
            last_stamp: 0,
        }
    }

    pub fn state(&self) -> &FileSystemState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn current_path(&self) -> &[ItemId] {
        &self.state.current_path
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        find_in(&self.state.items, id)
    }

    pub fn children_of(&self, folder: &ItemId) -> Result<&[Item]> {
        let item = self
            .find(folder)
            .ok_or_else(|| DesktopError::NotFound(folder.clone()))?;
        item.children()
            .ok_or_else(|| DesktopError::NotAFolder(folder.clone()))
    }

    /// Creates an item under the folder addressed by `parent_path`, a breadcrumb
    /// of folder ids starting at the root level. An empty path means the root.
    pub fn create(&mut self, kind: ItemKind, name: &str, parent_path: &[ItemId]) -> Result<Item> {
        let parent = self.resolve_path(parent_path)?;
        self.create_in(kind, name, parent.as_ref())
    }

    /// Creates an item directly inside `parent`, which may sit at any depth.
    pub fn create_in(
        &mut self,
        kind: ItemKind,
        name: &str,
        parent: Option<&ItemId>,
    ) -> Result<Item> {
        let name = validate_name(name)?;
        let siblings = match parent {
            Some(parent) => self.children_of(parent)?,
            None => self.items(),
        };
        ensure_unique_name(siblings, name, None)?;

        let item = Item::new(self.next_id(kind), name, kind);
        let items = std::mem::take(&mut self.state.items);
        self.state.items = match parent {
            Some(parent) => with_child(items, parent, &item),
            None => {
                let mut items = items;
                items.push(item.clone());
                items
            }
        };
        self.ids.insert(item.id.clone());

        tracing::debug!(id = %item.id, kind = ?kind, "item created");
        Ok(item)
    }

    /// Returns `false` when the item already had that name.
    pub fn rename(&mut self, id: &ItemId, new_name: &str) -> Result<bool> {
        let new_name = validate_name(new_name)?;
        let current = self
            .find(id)
            .ok_or_else(|| DesktopError::NotFound(id.clone()))?;
        if current.name == new_name {
            return Ok(false);
        }
        let siblings = self.siblings_of(id).unwrap_or(&[]);
        ensure_unique_name(siblings, new_name, Some(id))?;

        let items = std::mem::take(&mut self.state.items);
        self.state.items = renamed(items, id, new_name);
        Ok(true)
    }

    /// Removes `id` and its whole subtree, returning the removed item.
    pub fn delete(&mut self, id: &ItemId) -> Result<Item> {
        if !self.contains(id) {
            return Err(DesktopError::NotFound(id.clone()));
        }

        let items = std::mem::take(&mut self.state.items);
        let (items, removed) = without(items, id);
        self.state.items = items;
        let removed = removed.ok_or_else(|| DesktopError::NotFound(id.clone()))?;

        removed.walk(&mut |item| {
            self.ids.remove(&item.id);
        });
        if let Some(pos) = self
            .state
            .current_path
            .iter()
            .position(|segment| !self.ids.contains(segment))
        {
            self.state.current_path.truncate(pos);
        }

        tracing::debug!(id = %id, "item deleted");
        Ok(removed)
    }

    pub fn write_content(&mut self, id: &ItemId, content: &str) -> Result<()> {
        let item = self
            .find(id)
            .ok_or_else(|| DesktopError::NotFound(id.clone()))?;
        if item.is_folder() {
            return Err(DesktopError::NotAFile(id.clone()));
        }

        let items = std::mem::take(&mut self.state.items);
        self.state.items = with_content(items, id, content);
        Ok(())
    }

    /// Items of the folder the breadcrumb points at. Walking stops at the first
    /// segment that does not resolve to a folder.
    pub fn current_items(&self) -> &[Item] {
        let mut level: &[Item] = &self.state.items;
        for segment in &self.state.current_path {
            match level
                .iter()
                .find(|item| &item.id == segment)
                .and_then(Item::children)
            {
                Some(children) => level = children,
                None => break,
            }
        }
        level
    }

    pub fn navigate_to(&mut self, folder: &ItemId) -> Result<()> {
        let target = self
            .current_items()
            .iter()
            .find(|item| &item.id == folder)
            .ok_or_else(|| DesktopError::NotFound(folder.clone()))?;
        if !target.is_folder() {
            return Err(DesktopError::NotAFolder(folder.clone()));
        }
        self.state.current_path.push(folder.clone());
        Ok(())
    }

    pub fn navigate_up(&mut self) -> bool {
        self.state.current_path.pop().is_some()
    }

    fn resolve_path(&self, path: &[ItemId]) -> Result<Option<ItemId>> {
        let mut level: &[Item] = &self.state.items;
        let mut parent = None;
        for segment in path {
            let item = level
                .iter()
                .find(|item| &item.id == segment)
                .ok_or_else(|| DesktopError::NotFound(segment.clone()))?;
            level = item
                .children()
                .ok_or_else(|| DesktopError::NotAFolder(segment.clone()))?;
            parent = Some(item.id.clone());
        }
        Ok(parent)
    }

    fn siblings_of(&self, id: &ItemId) -> Option<&[Item]> {
        fn search<'a>(level: &'a [Item], id: &ItemId) -> Option<&'a [Item]> {
            if level.iter().any(|item| &item.id == id) {
                return Some(level);
            }
            level
                .iter()
                .filter_map(Item::children)
                .find_map(|children| search(children, id))
        }
        search(&self.state.items, id)
    }

    fn next_id(&mut self, kind: ItemKind) -> ItemId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut stamp = now.max(self.last_stamp + 1);
        loop {
            let id = ItemId::new(format!("{}-{}", kind.id_prefix(), stamp));
            if !self.ids.contains(&id) {
                self.last_stamp = stamp;
                return id;
            }
            stamp += 1;
        }
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DesktopError::InvalidName);
    }
    Ok(name)
}

fn ensure_unique_name(siblings: &[Item], name: &str, except: Option<&ItemId>) -> Result<()> {
    let taken = siblings
        .iter()
        .any(|item| item.name == name && Some(&item.id) != except);
    if taken {
        return Err(DesktopError::DuplicateName(name.to_string()));
    }
    Ok(())
}

fn find_in<'a>(items: &'a [Item], id: &ItemId) -> Option<&'a Item> {
    for item in items {
        if &item.id == id {
            return Some(item);
        }
        if let Some(found) = item.children().and_then(|c| find_in(c, id)) {
            return Some(found);
        }
    }
    None
}

fn map_children(mut item: Item, f: impl FnOnce(Vec<Item>) -> Vec<Item>) -> Item {
    if let Some(children) = item.children_mut() {
        let taken = std::mem::take(children);
        *children = f(taken);
    }
    item
}

fn with_child(items: Vec<Item>, parent: &ItemId, child: &Item) -> Vec<Item> {
    items
        .into_iter()
        .map(|item| {
            if &item.id == parent {
                map_children(item, |mut children| {
                    children.push(child.clone());
                    children
                })
            } else {
                map_children(item, |children| with_child(children, parent, child))
            }
        })
        .collect()
}

fn renamed(items: Vec<Item>, id: &ItemId, name: &str) -> Vec<Item> {
    items
        .into_iter()
        .map(|mut item| {
            if &item.id == id {
                item.name = name.to_string();
            }
            map_children(item, |children| renamed(children, id, name))
        })
        .collect()
}

fn with_content(items: Vec<Item>, id: &ItemId, content: &str) -> Vec<Item> {
    items
        .into_iter()
        .map(|item| {
            if &item.id == id {
                return Item::file(item.id, item.name, content);
            }
            map_children(item, |children| with_content(children, id, content))
        })
        .collect()
}

fn without(items: Vec<Item>, id: &ItemId) -> (Vec<Item>, Option<Item>) {
    let mut removed = None;
    let kept = items
        .into_iter()
        .filter_map(|item| {
            if &item.id == id {
                removed = Some(item);
                return None;
            }
            if removed.is_some() {
                return Some(item);
            }
            Some(map_children(item, |children| {
                let (children, found) = without(children, id);
                if found.is_some() {
                    removed = found;
                }
                children
            }))
        })
        .collect();
    (kept, removed)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/file_system.rs"]
mod tests;
