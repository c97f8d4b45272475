//! Headless still-image production from discovered configurations.

pub mod controller;
pub mod errors;

pub use controller::SnapshotController;
pub use errors::SnapshotError;
