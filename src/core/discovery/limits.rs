/// Closed interval `[min, max]` sampled uniformly during discovery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Span<T> {
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoveryLimits {
    pub center_real: Span<f32>,
    pub center_imag: Span<f32>,
    pub mandelbrot_half_extent: Span<f32>,
    pub julia_half_extent: Span<f32>,
    pub max_iterations: Span<u32>,
    pub sample_grid: usize,
    pub min_distinct_ratio: f32,
    /// Julia constants are redrawn until their own Mandelbrot escape time
    /// reaches this value, keeping the Julia set close to connected.
    pub julia_constant_min_escape: u32,
    pub julia_constant_probe_iterations: u32,
    pub max_attempts: u32,
}

impl DiscoveryLimits {
    pub(crate) fn first_invalid_field(&self) -> Option<&'static str> {
        if !self.center_real.is_valid() {
            return Some("center_real");
        }
        if !self.center_imag.is_valid() {
            return Some("center_imag");
        }
        if !(self.mandelbrot_half_extent.is_valid() && self.mandelbrot_half_extent.min > 0.0) {
            return Some("mandelbrot_half_extent");
        }
        if !(self.julia_half_extent.is_valid() && self.julia_half_extent.min > 0.0) {
            return Some("julia_half_extent");
        }
        if !(self.max_iterations.is_valid() && self.max_iterations.min > 0) {
            return Some("max_iterations");
        }
        if self.sample_grid == 0 {
            return Some("sample_grid");
        }
        if !self.min_distinct_ratio.is_finite() {
            return Some("min_distinct_ratio");
        }
        if self.max_attempts == 0 {
            return Some("max_attempts");
        }
        None
    }
}

impl Default for DiscoveryLimits {
    fn default() -> Self {
        Self {
            center_real: Span::new(-2.0, 0.75),
            center_imag: Span::new(-1.5, 1.5),
            mandelbrot_half_extent: Span::new(0.005, 0.05),
            julia_half_extent: Span::new(0.05, 0.5),
            max_iterations: Span::new(40, 256),
            sample_grid: 8,
            min_distinct_ratio: 0.6,
            julia_constant_min_escape: 16,
            julia_constant_probe_iterations: 256,
            max_attempts: 20_000,
        }
    }
}
