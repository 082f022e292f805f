use crate::error::DesktopError;
use crate::kernel::file_system::FileSystemStore;
use crate::kernel::geometry::GestureTracker;
use crate::kernel::services::ports::DesktopConfig;
use crate::kernel::windows::{TaskbarEntry, WindowId, WindowManager};
use crate::models::{FileSystemState, Item, ItemId, ItemKind, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextMenuTarget {
    /// Empty space of the desktop (`folder == None`) or of a folder window.
    Background { folder: Option<ItemId> },
    Item(ItemId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextMenuItem {
    NewFolder,
    NewTextFile,
    Rename,
    Delete,
}

impl ContextMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            ContextMenuItem::NewFolder => "New Folder",
            ContextMenuItem::NewTextFile => "New Text File",
            ContextMenuItem::Rename => "Rename",
            ContextMenuItem::Delete => "Delete",
        }
    }

    pub fn for_target(target: &ContextMenuTarget) -> Vec<ContextMenuItem> {
        match target {
            ContextMenuTarget::Background { .. } => {
                vec![ContextMenuItem::NewFolder, ContextMenuItem::NewTextFile]
            }
            ContextMenuTarget::Item(_) => vec![ContextMenuItem::Rename, ContextMenuItem::Delete],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextMenuState {
    pub visible: bool,
    pub anchor: Point,
    pub target: Option<ContextMenuTarget>,
    pub items: Vec<ContextMenuItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconEntry {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
}

impl IconEntry {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind(),
        }
    }
}

pub struct AppState {
    pub config: DesktopConfig,
    pub fs: FileSystemStore,
    pub windows: WindowManager,
    pub gesture: GestureTracker,
    pub context_menu: ContextMenuState,
    pub last_error: Option<DesktopError>,
}

impl AppState {
    pub fn new(fs: FileSystemState, config: DesktopConfig) -> Self {
        Self {
            config,
            fs: FileSystemStore::new(fs),
            windows: WindowManager::new(),
            gesture: GestureTracker::new(),
            context_menu: ContextMenuState::default(),
            last_error: None,
        }
    }

    pub fn desktop_icons(&self) -> Vec<IconEntry> {
        self.fs.items().iter().map(IconEntry::from_item).collect()
    }

    /// Icons inside a window, read from the store at call time.
    pub fn window_icons(&self, window: &WindowId) -> Vec<IconEntry> {
        self.windows
            .get(window)
            .and_then(|w| self.fs.children_of(&w.folder).ok())
            .map(|children| children.iter().map(IconEntry::from_item).collect())
            .unwrap_or_default()
    }

    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.windows.taskbar(&self.fs)
    }
}
