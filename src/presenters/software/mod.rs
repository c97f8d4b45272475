pub mod backend;
pub mod rasterize;
