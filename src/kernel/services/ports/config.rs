use serde::{Deserialize, Serialize};

use crate::kernel::geometry::HandleMetrics;
use crate::models::Size;

pub const DEFAULT_STORAGE_KEY: &str = "fileSystem";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    pub storage_key: String,
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Share of the viewport a freshly opened window covers.
    pub window_scale: f64,
    pub title_bar_height: i32,
    pub edge_handle: i32,
    pub corner_handle: i32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            viewport_width: 1280,
            viewport_height: 800,
            window_scale: 0.75,
            title_bar_height: 40,
            edge_handle: 4,
            corner_handle: 16,
        }
    }
}

impl DesktopConfig {
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    pub fn handle_metrics(&self) -> HandleMetrics {
        HandleMetrics {
            title_bar_height: self.title_bar_height,
            edge: self.edge_handle,
            corner: self.corner_handle,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
