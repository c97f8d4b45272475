pub mod escape_time;
pub mod fractal_algorithm;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
