//! webtop - 桌面隐喻文件浏览器的无界面核心
//!
//! 模块结构：
//! - models: 数据模型（Item, FileSystemState, 几何类型）
//! - kernel: 状态容器与 reducer（文件系统、窗口管理、拖拽/缩放手势）
//! - kernel::services: 存储/配置契约及其适配器
//! - app: 应用层（Desktop，执行 kernel 返回的副作用）

pub mod app;
pub mod error;
pub mod kernel;
pub mod logging;
pub mod models;

pub use app::Desktop;
pub use error::{DesktopError, Result};
