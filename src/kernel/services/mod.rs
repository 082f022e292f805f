//! Services layer (ports + adapters).
//!
//! - `ports`: contracts and data types the kernel depends on.
//! - `adapters`: OS specific implementations (files, directories).

pub mod adapters;
pub mod ports;
