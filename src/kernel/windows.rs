//! Open folder windows: stacking order, minimize/maximize, active window.
//!
//! A window refers to its folder by id and reads names and contents from the
//! [`FileSystemStore`] when needed, so it never goes stale after a rename.

use compact_str::{format_compact, CompactString};
use std::fmt;

use crate::error::{DesktopError, Result};
use crate::kernel::file_system::FileSystemStore;
use crate::kernel::geometry::GeometryUpdate;
use crate::models::{Bounds, Item, ItemId, Size};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(CompactString);

impl WindowId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowState {
    pub id: WindowId,
    pub folder: ItemId,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    pub bounds: Bounds,
    restore_bounds: Option<Bounds>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window: WindowId,
    pub title: String,
    pub is_minimized: bool,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct WindowManager {
    windows: Vec<WindowState>,
    max_z: u64,
    next_serial: u64,
    active: Option<WindowId>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn get(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn active(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    pub fn max_z_index(&self) -> u64 {
        self.max_z
    }

    pub fn open(&mut self, item: &Item, bounds: Bounds) -> Result<WindowState> {
        if !item.is_folder() {
            return Err(DesktopError::NotAFolder(item.id.clone()));
        }

        self.next_serial += 1;
        self.max_z += 1;
        let window = WindowState {
            id: WindowId::new(format_compact!("window-{}", self.next_serial)),
            folder: item.id.clone(),
            is_minimized: false,
            is_maximized: false,
            z_index: self.max_z,
            bounds,
            restore_bounds: None,
        };
        self.windows.push(window.clone());
        self.active = Some(window.id.clone());

        tracing::debug!(window = %window.id, folder = %item.id, "window opened");
        Ok(window)
    }

    pub fn close(&mut self, id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != id);
        let closed = self.windows.len() != before;
        if closed && self.active.as_ref() == Some(id) {
            self.active = self.topmost_visible().map(|w| w.id.clone());
        }
        closed
    }

    pub fn minimize(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) else {
            return false;
        };
        window.is_minimized = !window.is_minimized;
        let minimized = window.is_minimized;
        if minimized && self.active.as_ref() == Some(id) {
            self.active = self.topmost_visible().map(|w| w.id.clone());
        }
        true
    }

    pub fn focus(&mut self, id: &WindowId) -> bool {
        let next_z = self.max_z + 1;
        let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) else {
            return false;
        };
        window.z_index = next_z;
        window.is_minimized = false;
        self.max_z = next_z;
        self.active = Some(id.clone());
        true
    }

    pub fn toggle_maximize(&mut self, id: &WindowId, viewport: Size) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) else {
            return false;
        };
        if window.is_maximized {
            if let Some(restore) = window.restore_bounds.take() {
                window.bounds = restore;
            }
            window.is_maximized = false;
        } else {
            window.restore_bounds = Some(window.bounds);
            window.bounds = Bounds::new(0, 0, viewport.width, viewport.height);
            window.is_maximized = true;
        }
        true
    }

    pub fn fit_maximized(&mut self, viewport: Size) {
        for window in self.windows.iter_mut().filter(|w| w.is_maximized) {
            window.bounds = Bounds::new(0, 0, viewport.width, viewport.height);
        }
    }

    pub fn apply_geometry(&mut self, id: &WindowId, update: GeometryUpdate) -> bool {
        let Some(window) = self.windows.iter_mut().find(|w| &w.id == id) else {
            return false;
        };
        let next = match update {
            GeometryUpdate::Move(position) => Bounds {
                position,
                size: window.bounds.size,
            },
            GeometryUpdate::Reshape(bounds) => bounds,
        };
        let changed = next != window.bounds;
        window.bounds = next;
        changed
    }

    /// Closes every window whose folder is gone from `fs`. Returns the closed ids.
    pub fn close_missing(&mut self, fs: &FileSystemStore) -> Vec<WindowId> {
        let missing: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|w| !fs.contains(&w.folder))
            .map(|w| w.id.clone())
            .collect();
        for id in &missing {
            self.close(id);
        }
        missing
    }

    pub fn topmost_visible(&self) -> Option<&WindowState> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
    }

    /// Non-minimized windows from bottom to top.
    pub fn paint_order(&self) -> Vec<&WindowState> {
        let mut visible: Vec<&WindowState> =
            self.windows.iter().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn title(&self, id: &WindowId, fs: &FileSystemStore) -> Option<String> {
        let window = self.get(id)?;
        fs.find(&window.folder).map(|item| item.name.clone())
    }

    pub fn taskbar(&self, fs: &FileSystemStore) -> Vec<TaskbarEntry> {
        self.windows
            .iter()
            .map(|w| TaskbarEntry {
                window: w.id.clone(),
                title: fs
                    .find(&w.folder)
                    .map(|item| item.name.clone())
                    .unwrap_or_default(),
                is_minimized: w.is_minimized,
                is_active: self.active.as_ref() == Some(&w.id),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/windows.rs"]
mod tests;
