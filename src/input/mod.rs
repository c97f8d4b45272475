//! Interactive front ends that feed host commands into the playback
//! scheduler.

#[cfg(feature = "gui")]
pub mod gui;
