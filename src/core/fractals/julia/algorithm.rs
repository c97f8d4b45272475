use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(constant: Complex, max_iterations: u32) -> Self {
        Self {
            constant,
            max_iterations,
        }
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> u32 {
        escape_time(point, self.constant, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_constant_gives_unit_disc() {
        let algorithm = JuliaAlgorithm::new(Complex::default(), 100);

        assert_eq!(algorithm.compute(Complex::new(0.5, 0.5)), 100);
        assert_eq!(algorithm.compute(Complex::new(0.0, 0.99)), 100);
    }

    #[test]
    fn test_point_outside_radius_escapes_immediately() {
        let algorithm = JuliaAlgorithm::new(Complex::new(-0.7, 0.27), 100);

        assert_eq!(algorithm.compute(Complex::new(2.0, 2.0)), 0);
    }

    #[test]
    fn test_constant_is_used_as_increment() {
        // z: 1 -> 1 + 1 = 2, |2|² = 4 at step 1
        let algorithm = JuliaAlgorithm::new(Complex::new(1.0, 0.0), 100);

        assert_eq!(algorithm.compute(Complex::new(1.0, 0.0)), 1);
    }
}
