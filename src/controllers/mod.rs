pub mod data;
pub mod playback;
pub mod ports;
pub mod snapshot;
