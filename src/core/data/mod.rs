pub mod complex;
pub mod configuration;
pub mod pixel_buffer;
pub mod region;
pub mod rgba;
