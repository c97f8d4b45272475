use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Relative difference under which two aspect ratios count as equal.
pub const ASPECT_RATIO_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidSize { width: f32, height: f32 },
    Collapsed { width: f32, height: f32 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "region size must be positive: {}x{}", width, height)
            }
            Self::Collapsed { width, height } => {
                write!(
                    f,
                    "zoom would collapse region to {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for RegionError {}

/// The rectangle of the complex plane mapped onto the drawable.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    bottom_left: Complex,
    top_right: Complex,
}

impl Region {
    pub fn new(bottom_left: Complex, top_right: Complex) -> Result<Self, RegionError> {
        let width = top_right.real - bottom_left.real;
        let height = top_right.imag - bottom_left.imag;

        if !(width > 0.0 && height > 0.0) {
            return Err(RegionError::InvalidSize { width, height });
        }

        Ok(Self {
            bottom_left,
            top_right,
        })
    }

    pub fn square(center: Complex, half_extent: f32) -> Result<Self, RegionError> {
        let offset = Complex::new(half_extent, half_extent);

        Self::new(center - offset, center + offset)
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        self.bottom_left
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        self.top_right
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex::new(self.bottom_left.real, self.top_right.imag)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex::new(self.top_right.real, self.bottom_left.imag)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.top_right.real - self.bottom_left.real
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.top_right.imag - self.bottom_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.bottom_left.real + self.top_right.real) / 2.0,
            (self.bottom_left.imag + self.top_right.imag) / 2.0,
        )
    }

    /// Shifts the region toward the lower left by `percent` of its extent
    /// on each axis. Negative values shift the other way.
    pub fn pan(&mut self, percent: f32) {
        let dx = self.width() / 100.0 * percent;
        let dy = self.height() / 100.0 * percent;

        self.bottom_left.real -= dx;
        self.top_right.real -= dx;
        self.bottom_left.imag -= dy;
        self.top_right.imag -= dy;
    }

    /// Shrinks the region about its centre by `percent` of its extent.
    ///
    /// Nothing stops a caller from passing 100 or more, which collapses or
    /// inverts the rectangle; see [`Region::try_zoom`] for the checked form.
    pub fn zoom(&mut self, percent: f32) {
        let dx = self.width() / 100.0 * percent / 2.0;
        let dy = self.height() / 100.0 * percent / 2.0;

        self.bottom_left.real += dx;
        self.top_right.real -= dx;
        self.bottom_left.imag += dy;
        self.top_right.imag -= dy;
    }

    /// Zooms only if both extents stay at or above `min_extent`. The region
    /// is left untouched on failure.
    pub fn try_zoom(&mut self, percent: f32, min_extent: f32) -> Result<(), RegionError> {
        let mut zoomed = *self;
        zoomed.zoom(percent);

        let width = zoomed.width();
        let height = zoomed.height();

        if !(width.is_finite() && height.is_finite())
            || width < min_extent
            || height < min_extent
        {
            return Err(RegionError::Collapsed { width, height });
        }

        *self = zoomed;
        Ok(())
    }

    /// Grows exactly one axis, symmetrically, so the region has the same
    /// aspect ratio as a `drawable_width` x `drawable_height` surface.
    pub fn adjust_aspect_ratio(&mut self, drawable_width: u32, drawable_height: u32) {
        if drawable_width == 0 || drawable_height == 0 {
            return;
        }

        let target = drawable_width as f32 / drawable_height as f32;
        let width = self.width();
        let height = self.height();
        let current = width / height;

        if (current - target).abs() <= ASPECT_RATIO_TOLERANCE * target {
            return;
        }

        if current < target {
            let grow = (height * target - width) / 2.0;
            self.bottom_left.real -= grow;
            self.top_right.real += grow;
        } else {
            let grow = (width / target - height) / 2.0;
            self.bottom_left.imag -= grow;
            self.top_right.imag += grow;
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            bottom_left: Complex::new(-0.22, -0.7),
            top_right: Complex::new(-0.21, -0.69),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_approx_eq(a: f32, b: f32, tolerance: f32) {
        assert!(
            (a - b).abs() <= tolerance,
            "expected {} to be within {} of {}",
            a,
            tolerance,
            b
        );
    }

    fn unit_square() -> Region {
        Region::new(Complex::new(0.0, 0.0), Complex::new(1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_region_new_rejects_empty_and_inverted() {
        let zero_width = Region::new(Complex::new(0.0, 0.0), Complex::new(0.0, 1.0));
        let inverted = Region::new(Complex::new(1.0, 1.0), Complex::new(0.0, 0.0));

        assert_eq!(
            zero_width,
            Err(RegionError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert!(inverted.is_err());
    }

    #[test]
    fn test_region_new_rejects_nan() {
        let region = Region::new(Complex::new(f32::NAN, 0.0), Complex::new(1.0, 1.0));

        assert!(region.is_err());
    }

    #[test]
    fn test_derived_corners() {
        let region = Region::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 3.0)).unwrap();

        assert_eq!(region.top_left(), Complex::new(-2.0, 3.0));
        assert_eq!(region.bottom_right(), Complex::new(1.0, -1.0));
        assert_eq!(region.width(), 3.0);
        assert_eq!(region.height(), 4.0);
        assert_eq!(region.center(), Complex::new(-0.5, 1.0));
    }

    #[test]
    fn test_square_is_centred() {
        let region = Region::square(Complex::new(0.5, -0.5), 0.25).unwrap();

        assert_eq!(region.bottom_left(), Complex::new(0.25, -0.75));
        assert_eq!(region.top_right(), Complex::new(0.75, -0.25));
    }

    #[test]
    fn test_square_rejects_non_positive_half_extent() {
        assert!(Region::square(Complex::default(), 0.0).is_err());
    }

    #[test]
    fn test_default_region() {
        let region = Region::default();

        assert_eq!(region.bottom_left(), Complex::new(-0.22, -0.7));
        assert_eq!(region.top_right(), Complex::new(-0.21, -0.69));
    }

    #[test]
    fn test_pan_shifts_both_corners_by_percent_of_extent() {
        let mut region = unit_square();

        region.pan(10.0);

        assert_approx_eq(region.bottom_left().real, -0.1, 1e-6);
        assert_approx_eq(region.bottom_left().imag, -0.1, 1e-6);
        assert_approx_eq(region.top_right().real, 0.9, 1e-6);
        assert_approx_eq(region.top_right().imag, 0.9, 1e-6);
    }

    #[test]
    fn test_pan_tick_on_default_region() {
        let mut region = Region::default();
        let before = region.bottom_left();

        region.pan(0.1);

        // 0.01 wide, so 0.1% is 1e-5
        assert_approx_eq(before.real - region.bottom_left().real, 1e-5, 1e-7);
        assert_approx_eq(before.imag - region.bottom_left().imag, 1e-5, 1e-7);
    }

    #[test]
    fn test_zoom_moves_each_edge_by_half_the_delta() {
        let mut region = unit_square();

        region.zoom(10.0);

        assert_approx_eq(region.bottom_left().real, 0.05, 1e-6);
        assert_approx_eq(region.bottom_left().imag, 0.05, 1e-6);
        assert_approx_eq(region.top_right().real, 0.95, 1e-6);
        assert_approx_eq(region.top_right().imag, 0.95, 1e-6);
        assert_approx_eq(region.width(), 0.9, 1e-6);
    }

    #[test]
    fn test_zoom_keeps_centre() {
        let mut region = Region::default();
        let centre = region.center();

        region.zoom(0.1);

        assert_approx_eq(region.center().real, centre.real, 1e-6);
        assert_approx_eq(region.center().imag, centre.imag, 1e-6);
    }

    #[test]
    fn test_zoom_by_hundred_percent_collapses() {
        let mut region = unit_square();

        region.zoom(100.0);

        assert_approx_eq(region.width(), 0.0, 1e-6);
        assert_approx_eq(region.height(), 0.0, 1e-6);
    }

    #[test]
    fn test_try_zoom_applies_when_extent_stays_large_enough() {
        let mut region = unit_square();

        assert!(region.try_zoom(10.0, 0.5).is_ok());
        assert_approx_eq(region.width(), 0.9, 1e-6);
    }

    #[test]
    fn test_try_zoom_leaves_region_untouched_on_collapse() {
        let mut region = unit_square();

        let result = region.try_zoom(60.0, 0.5);

        assert!(matches!(result, Err(RegionError::Collapsed { .. })));
        assert_eq!(region, unit_square());
    }

    #[test]
    fn test_adjust_aspect_ratio_grows_height_for_tall_drawable() {
        let mut region = Region::default();

        region.adjust_aspect_ratio(200, 400);

        assert_approx_eq(region.width(), 0.01, 1e-6);
        assert_approx_eq(region.height(), 0.02, 1e-6);
        assert_approx_eq(region.center().imag, -0.695, 1e-6);
    }

    #[test]
    fn test_adjust_aspect_ratio_grows_width_for_wide_drawable() {
        let mut region = Region::default();

        region.adjust_aspect_ratio(400, 200);

        assert_approx_eq(region.width(), 0.02, 1e-6);
        assert_approx_eq(region.height(), 0.01, 1e-6);
        assert_approx_eq(region.center().real, -0.215, 1e-6);
    }

    #[test]
    fn test_adjust_aspect_ratio_is_a_no_op_when_ratio_matches() {
        let mut region = Region::default();

        region.adjust_aspect_ratio(300, 300);

        assert_eq!(region, Region::default());
    }

    #[test]
    fn test_adjust_aspect_ratio_ignores_zero_drawable() {
        let mut region = Region::default();

        region.adjust_aspect_ratio(0, 300);
        region.adjust_aspect_ratio(300, 0);

        assert_eq!(region, Region::default());
    }

    proptest! {
        #[test]
        fn pan_then_opposite_pan_returns_to_start(
            x in -2.0f32..0.5,
            y in -1.5f32..1.0,
            size in 0.01f32..0.5,
            percent in -10.0f32..10.0,
        ) {
            let original =
                Region::new(Complex::new(x, y), Complex::new(x + size, y + size)).unwrap();
            let mut region = original;

            region.pan(percent);
            region.pan(-percent);

            prop_assert!((region.bottom_left().real - original.bottom_left().real).abs() < 1e-5);
            prop_assert!((region.bottom_left().imag - original.bottom_left().imag).abs() < 1e-5);
            prop_assert!((region.top_right().real - original.top_right().real).abs() < 1e-5);
            prop_assert!((region.top_right().imag - original.top_right().imag).abs() < 1e-5);
        }

        #[test]
        fn adjust_aspect_ratio_never_shrinks_and_is_idempotent(
            width in 0.01f32..1.0,
            height in 0.01f32..1.0,
            drawable_width in 16u32..4096,
            drawable_height in 16u32..4096,
        ) {
            let original =
                Region::new(Complex::new(-0.5, -0.5), Complex::new(-0.5 + width, -0.5 + height))
                    .unwrap();
            let mut region = original;

            region.adjust_aspect_ratio(drawable_width, drawable_height);
            let once = region;
            region.adjust_aspect_ratio(drawable_width, drawable_height);

            prop_assert!(once.width() >= original.width() * (1.0 - 1e-6));
            prop_assert!(once.height() >= original.height() * (1.0 - 1e-6));
            prop_assert_eq!(region, once);

            let target = drawable_width as f32 / drawable_height as f32;
            let ratio = once.width() / once.height();
            prop_assert!((ratio - target).abs() <= 1e-3 * target);
        }
    }
}
