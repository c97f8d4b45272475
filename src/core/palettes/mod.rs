pub mod catalog;
pub mod errors;
pub mod functions;
pub mod kinds;
pub mod palette;
pub mod segment;
