//! Continuous playback: animates the current view, swaps in discovered
//! configurations after a dwell, and only produces frames when something
//! changed.

pub mod discovery_worker;
pub mod errors;
pub mod scheduler;
pub mod settings;
pub mod status;
pub mod timer;

pub use discovery_worker::DiscoveryWorker;
pub use errors::PlaybackError;
pub use scheduler::PlaybackScheduler;
pub use settings::PlaybackSettings;
pub use status::{PlaybackState, PlaybackStatus, PlaybackWarning};
