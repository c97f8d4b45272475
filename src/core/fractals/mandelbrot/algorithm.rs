use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        escape_time(Complex::default(), point, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_in_the_set() {
        let algorithm = MandelbrotAlgorithm::new(256);

        assert_eq!(algorithm.compute(Complex::new(0.0, 0.0)), 256);
    }

    #[test]
    fn test_far_point_escapes_after_one_step() {
        let algorithm = MandelbrotAlgorithm::new(256);

        assert_eq!(algorithm.compute(Complex::new(2.0, 2.0)), 1);
    }

    #[test]
    fn test_main_cardioid_and_period_two_bulb_are_in_the_set() {
        let algorithm = MandelbrotAlgorithm::new(500);

        assert_eq!(algorithm.compute(Complex::new(-0.1, 0.1)), 500);
        assert_eq!(algorithm.compute(Complex::new(-1.0, 0.0)), 500);
    }

    #[test]
    fn test_result_never_exceeds_max_iterations() {
        let algorithm = MandelbrotAlgorithm::new(40);

        for real in [-2.0, -1.5, -0.75, 0.0, 0.25, 0.3, 1.0] {
            for imag in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                assert!(algorithm.compute(Complex::new(real, imag)) <= 40);
            }
        }
    }
}
