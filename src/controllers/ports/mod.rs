//! Interfaces between the controllers and the adapters that drive devices,
//! files and background work.

pub mod discovery;
pub mod file_presenter;
pub mod render_backend;
