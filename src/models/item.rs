//! 虚拟文件系统数据模型
//!
//! Item 树与持久化的 FileSystemState（JSON blob）。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(CompactString);

impl ItemId {
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    File,
}

impl ItemKind {
    pub fn id_prefix(self) -> &'static str {
        match self {
            ItemKind::Folder => "folder",
            ItemKind::File => "file",
        }
    }
}

/// Kind-specific payload. Only folders carry children, only files carry content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemBody {
    Folder {
        #[serde(default)]
        children: Vec<Item>,
    },
    File {
        #[serde(default)]
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(flatten)]
    pub body: ItemBody,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        let body = match kind {
            ItemKind::Folder => ItemBody::Folder {
                children: Vec::new(),
            },
            ItemKind::File => ItemBody::File {
                content: String::new(),
            },
        };
        Self {
            id,
            name: name.into(),
            body,
        }
    }

    pub fn folder(id: impl Into<ItemId>, name: impl Into<String>, children: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body: ItemBody::Folder { children },
        }
    }

    pub fn file(id: impl Into<ItemId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            body: ItemBody::File {
                content: content.into(),
            },
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self.body {
            ItemBody::Folder { .. } => ItemKind::Folder,
            ItemBody::File { .. } => ItemKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.body, ItemBody::Folder { .. })
    }

    pub fn children(&self) -> Option<&[Item]> {
        match &self.body {
            ItemBody::Folder { children } => Some(children),
            ItemBody::File { .. } => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Item>> {
        match &mut self.body {
            ItemBody::Folder { children } => Some(children),
            ItemBody::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match &self.body {
            ItemBody::File { content } => Some(content),
            ItemBody::Folder { .. } => None,
        }
    }

    /// Visits this item and every descendant, depth first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Item)) {
        visit(self);
        if let Some(children) = self.children() {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

/// The whole persisted desktop: root items plus the navigation breadcrumb.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemState {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub current_path: Vec<ItemId>,
}

impl FileSystemState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            current_path: Vec::new(),
        }
    }

    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_blob(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    pub fn for_each_item<'a>(&'a self, mut visit: impl FnMut(&'a Item)) {
        for item in &self.items {
            item.walk(&mut visit);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/item.rs"]
mod tests;
