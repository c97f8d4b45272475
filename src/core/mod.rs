pub mod actions;
pub mod data;
pub mod discovery;
pub mod fractals;
pub mod palettes;
