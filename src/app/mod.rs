//! Application layer: the desktop runtime.

pub mod desktop;

pub use desktop::Desktop;
