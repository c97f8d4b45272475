//! Windowed explorer: a winit event loop driving the playback scheduler,
//! a pixels surface for the frames and an egui settings sheet.

mod app;
mod errors;
pub mod keys;
pub mod settings_sheet;

pub use app::{GuiOptions, run_gui};
pub use errors::GuiError;
