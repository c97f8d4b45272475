use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use std::error::Error;
use std::fmt;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.223_346_5, -0.693_952_6);
pub const DEFAULT_MAX_ITERATIONS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    ZeroMaxIterations,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ConfigurationError {}

/// Everything needed to reproduce one view of a fractal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub fractal_kind: FractalKind,
    /// Only read for Julia; carried along for Mandelbrot so switching kinds
    /// keeps a meaningful constant.
    pub julia_constant: Complex,
    pub region: Region,
    pub palette_index: usize,
    pub max_iterations: u32,
}

impl Configuration {
    pub fn new(
        fractal_kind: FractalKind,
        julia_constant: Complex,
        region: Region,
        palette_index: usize,
        max_iterations: u32,
    ) -> Result<Self, ConfigurationError> {
        if max_iterations == 0 {
            return Err(ConfigurationError::ZeroMaxIterations);
        }

        Ok(Self {
            fractal_kind,
            julia_constant,
            region,
            palette_index,
            max_iterations,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> Box<dyn FractalAlgorithm> {
        match self.fractal_kind {
            FractalKind::Mandelbrot => Box::new(MandelbrotAlgorithm::new(self.max_iterations)),
            FractalKind::Julia => Box::new(JuliaAlgorithm::new(
                self.julia_constant,
                self.max_iterations,
            )),
        }
    }

    #[must_use]
    pub fn escape_time(&self, point: Complex) -> u32 {
        self.algorithm().compute(point)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            fractal_kind: FractalKind::Mandelbrot,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            region: Region::default(),
            palette_index: 0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_iterations() {
        let result = Configuration::new(
            FractalKind::Mandelbrot,
            DEFAULT_JULIA_CONSTANT,
            Region::default(),
            0,
            0,
        );

        assert_eq!(result, Err(ConfigurationError::ZeroMaxIterations));
    }

    #[test]
    fn test_default_is_the_startup_view() {
        let configuration = Configuration::default();

        assert_eq!(configuration.fractal_kind, FractalKind::Mandelbrot);
        assert_eq!(configuration.palette_index, 0);
        assert_eq!(configuration.max_iterations, 120);
        assert_eq!(configuration.region, Region::default());
    }

    #[test]
    fn test_escape_time_dispatches_on_kind() {
        let mut configuration = Configuration {
            julia_constant: Complex::new(1.0, 0.0),
            max_iterations: 64,
            ..Configuration::default()
        };
        let point = Complex::new(1.0, 0.0);

        // Mandelbrot: z 0 -> 1 -> 2
        assert_eq!(configuration.escape_time(point), 2);

        // Julia: z 1 -> 2
        configuration.fractal_kind = FractalKind::Julia;
        assert_eq!(configuration.escape_time(point), 1);
    }

    #[test]
    fn test_algorithm_reports_max_iterations() {
        let configuration = Configuration::default();

        assert_eq!(configuration.algorithm().max_iterations(), 120);
    }
}
