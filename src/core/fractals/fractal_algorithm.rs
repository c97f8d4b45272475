use crate::core::data::complex::Complex;

/// Maps a point of the complex plane to its escape time.
pub trait FractalAlgorithm: Send + Sync {
    fn compute(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
