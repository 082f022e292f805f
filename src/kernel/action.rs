use crate::kernel::geometry::PointerButton;
use crate::kernel::state::{ContextMenuItem, ContextMenuTarget};
use crate::kernel::windows::WindowId;
use crate::models::{ItemId, ItemKind, Point, Size};

#[derive(Debug, Clone)]
pub enum Action {
    CreateItem {
        kind: ItemKind,
        name: String,
        parent: Option<ItemId>,
    },
    CreateAtPath {
        kind: ItemKind,
        name: String,
        parent_path: Vec<ItemId>,
    },
    RenameItem {
        id: ItemId,
        name: String,
    },
    DeleteItem {
        id: ItemId,
    },
    WriteContent {
        id: ItemId,
        content: String,
    },
    NavigateTo {
        folder: ItemId,
    },
    NavigateUp,
    /// Icon click: folders open in a new window, files do nothing.
    ActivateItem {
        id: ItemId,
    },
    OpenWindow {
        folder: ItemId,
    },
    CloseWindow {
        window: WindowId,
    },
    MinimizeWindow {
        window: WindowId,
    },
    FocusWindow {
        window: WindowId,
    },
    ToggleMaximize {
        window: WindowId,
    },
    TaskbarClick {
        window: WindowId,
    },
    PointerDown {
        pos: Point,
        button: PointerButton,
    },
    PointerMove {
        pos: Point,
    },
    PointerUp,
    ContextMenuOpen {
        target: ContextMenuTarget,
        pos: Point,
    },
    ContextMenuClose,
    /// `name` carries the text the user typed for New Folder / New Text File / Rename.
    ContextMenuChoose {
        item: ContextMenuItem,
        name: Option<String>,
    },
    SetViewport {
        size: Size,
    },
}
