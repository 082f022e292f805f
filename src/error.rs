use crate::models::ItemId;
use std::{fmt, io};

#[derive(Debug)]
pub enum DesktopError {
    NotFound(ItemId),
    InvalidName,
    DuplicateName(String),
    NotAFolder(ItemId),
    NotAFile(ItemId),
    PersistenceCorrupt(String),
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, DesktopError>;

impl fmt::Display for DesktopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesktopError::NotFound(id) => write!(f, "item not found: {id}"),
            DesktopError::InvalidName => write!(f, "name must not be empty"),
            DesktopError::DuplicateName(name) => {
                write!(f, "an item named {name:?} already exists here")
            }
            DesktopError::NotAFolder(id) => write!(f, "item is not a folder: {id}"),
            DesktopError::NotAFile(id) => write!(f, "item is not a file: {id}"),
            DesktopError::PersistenceCorrupt(msg) => {
                write!(f, "persisted file system is unreadable: {msg}")
            }
            DesktopError::Io(e) => write!(f, "storage i/o failed: {e}"),
        }
    }
}

impl std::error::Error for DesktopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DesktopError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DesktopError {
    fn from(e: io::Error) -> Self {
        DesktopError::Io(e)
    }
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::PersistenceCorrupt(e.to_string())
    }
}
