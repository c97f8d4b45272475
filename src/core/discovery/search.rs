use crate::core::data::complex::Complex;
use crate::core::data::configuration::{Configuration, DEFAULT_JULIA_CONSTANT};
use crate::core::data::region::Region;
use crate::core::discovery::errors::DiscoveryError;
use crate::core::discovery::interestingness::is_interesting;
use crate::core::discovery::limits::DiscoveryLimits;
use crate::core::discovery::request::DiscoveryRequest;
use crate::core::fractals::escape_time::escape_time;
use crate::core::fractals::fractal_kinds::FractalKind;
use rand::Rng;
use tracing::{debug, trace};

/// Randomised search for configurations that pass the interestingness test.
pub struct ConfigurationSearch<R: Rng> {
    rng: R,
    limits: DiscoveryLimits,
    palette_count: usize,
}

impl<R: Rng> ConfigurationSearch<R> {
    pub fn new(rng: R, limits: DiscoveryLimits, palette_count: usize) -> Result<Self, DiscoveryError> {
        if let Some(field) = limits.first_invalid_field() {
            return Err(DiscoveryError::InvalidLimits { field });
        }

        Ok(Self {
            rng,
            limits,
            palette_count,
        })
    }

    #[must_use]
    pub fn limits(&self) -> &DiscoveryLimits {
        &self.limits
    }

    /// Draws candidates until one is interesting or `max_attempts` is spent.
    pub fn discover(&mut self, request: &DiscoveryRequest) -> Result<Configuration, DiscoveryError> {
        let max_attempts = self.limits.max_attempts;

        for attempt in 1..=max_attempts {
            let candidate = self.candidate(request);

            if is_interesting(
                &candidate,
                self.limits.sample_grid,
                self.limits.min_distinct_ratio,
            ) {
                debug!(
                    attempt,
                    kind = candidate.fractal_kind.display_name(),
                    centre_real = candidate.region.center().real,
                    centre_imag = candidate.region.center().imag,
                    width = candidate.region.width(),
                    max_iterations = candidate.max_iterations,
                    palette = candidate.palette_index,
                    "discovered configuration"
                );
                return Ok(candidate);
            }

            trace!(attempt, "rejected flat candidate");
        }

        Err(DiscoveryError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// One random configuration, not yet tested for interestingness.
    pub fn candidate(&mut self, request: &DiscoveryRequest) -> Configuration {
        let fractal_kind = if self.rng.random_bool(0.5) {
            FractalKind::Julia
        } else {
            FractalKind::Mandelbrot
        };

        let centre = self.random_point();
        let half_extent_span = match fractal_kind {
            FractalKind::Mandelbrot => self.limits.mandelbrot_half_extent,
            FractalKind::Julia => self.limits.julia_half_extent,
        };
        let half_extent = self
            .rng
            .random_range(half_extent_span.min..=half_extent_span.max);

        let julia_constant = match fractal_kind {
            FractalKind::Mandelbrot => DEFAULT_JULIA_CONSTANT,
            FractalKind::Julia => self.julia_constant(),
        };

        let mut region = Region::square(centre, half_extent).unwrap_or_default();
        region.adjust_aspect_ratio(request.drawable_width, request.drawable_height);

        let palette_index = self.palette_other_than(request.current_palette);
        let max_iterations = self
            .rng
            .random_range(self.limits.max_iterations.min..=self.limits.max_iterations.max);

        Configuration {
            fractal_kind,
            julia_constant,
            region,
            palette_index,
            max_iterations,
        }
    }

    fn random_point(&mut self) -> Complex {
        let real = self.limits.center_real;
        let imag = self.limits.center_imag;

        Complex::new(
            self.rng.random_range(real.min..=real.max),
            self.rng.random_range(imag.min..=imag.max),
        )
    }

    fn julia_constant(&mut self) -> Complex {
        let mut constant = self.random_point();

        for _ in 1..self.limits.max_attempts {
            let escape = escape_time(
                Complex::default(),
                constant,
                self.limits.julia_constant_probe_iterations,
            );

            if escape >= self.limits.julia_constant_min_escape {
                break;
            }

            constant = self.random_point();
        }

        constant
    }

    fn palette_other_than(&mut self, current: usize) -> usize {
        if self.palette_count <= 1 {
            return 0;
        }

        let index = self.rng.random_range(0..self.palette_count - 1);
        if index >= current { index + 1 } else { index }
    }
}
