//! Loading `DesktopConfig` from a JSON file.

use std::path::Path;

use crate::kernel::services::ports::DesktopConfig;

pub const CONFIG_FILE: &str = "config.json";

/// Missing file: defaults. Unreadable or malformed file: defaults plus a warning.
pub fn load_config(path: &Path) -> DesktopConfig {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return DesktopConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "read config failed");
            return DesktopConfig::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config is malformed, using defaults");
            DesktopConfig::default()
        }
    }
}

pub fn ensure_config_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&DesktopConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
