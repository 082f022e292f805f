//! 数据模型层

pub mod geom;
pub mod item;

pub use geom::{Bounds, Point, Size};
pub use item::{FileSystemState, Item, ItemBody, ItemId, ItemKind};
