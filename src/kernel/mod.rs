//! Headless desktop core (state/action/effect).

pub mod action;
pub mod effect;
pub mod file_system;
pub mod geometry;
pub mod persistence;
pub mod services;
pub mod state;
pub mod store;
pub mod windows;

pub use action::Action;
pub use effect::Effect;
pub use file_system::FileSystemStore;
pub use geometry::{
    hit_test, Gesture, GestureTracker, GeometryUpdate, HandleMetrics, PointerButton,
    ResizeDirection, WindowHit,
};
pub use persistence::{default_state, load_state, save_state, LoadSource, Loaded};
pub use state::{AppState, ContextMenuItem, ContextMenuState, ContextMenuTarget, IconEntry};
pub use store::{DispatchResult, Store};
pub use windows::{TaskbarEntry, WindowId, WindowManager, WindowState};
