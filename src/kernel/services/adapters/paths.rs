//! 数据目录管理
//!
//! 跨平台的数据目录：
//! - macOS: ~/Library/Application Support/webtop
//! - Linux: $XDG_DATA_HOME/webtop 或 ~/.local/share/webtop
//! - Windows: %APPDATA%\webtop

use std::path::PathBuf;

const APP_NAME: &str = "webtop";
const STORAGE_DIR: &str = "storage";
const LOG_DIR: &str = "logs";

pub fn default_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn storage_dir() -> Option<PathBuf> {
    default_data_dir().map(|p| p.join(STORAGE_DIR))
}

pub fn log_dir() -> Option<PathBuf> {
    default_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
