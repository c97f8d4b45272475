use crate::core::palettes::errors::PaletteError;

/// A control point of a piecewise-linear channel. `y_in` is the value
/// approached from the left, `y_out` the value leaving to the right, so a
/// point with `y_in != y_out` is a discontinuity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPoint {
    pub x: f32,
    pub y_in: f32,
    pub y_out: f32,
}

impl SegmentPoint {
    #[must_use]
    pub const fn new(x: f32, y_in: f32, y_out: f32) -> Self {
        Self { x, y_in, y_out }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentChannels {
    pub red: &'static [SegmentPoint],
    pub green: &'static [SegmentPoint],
    pub blue: &'static [SegmentPoint],
}

fn validate(points: &[SegmentPoint]) -> Result<(), PaletteError> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(PaletteError::TooFewPoints { count: 0 });
    };

    if points.len() < 2 {
        return Err(PaletteError::TooFewPoints {
            count: points.len(),
        });
    }

    if first.x != 0.0 || last.x != 1.0 {
        return Err(PaletteError::InvalidEndpoints {
            first: first.x,
            last: last.x,
        });
    }

    if let Some(index) = points
        .windows(2)
        .position(|pair| pair[1].x < pair[0].x)
    {
        return Err(PaletteError::DecreasingPosition { index: index + 1 });
    }

    Ok(())
}

/// Expands control points into `size` channel values in `[0, 1]`.
///
/// Positions are scaled onto `0..size-1`. Entry 0 takes the first point's
/// outgoing value and the last entry takes the final point's incoming value;
/// each interior entry interpolates between the outgoing value of the
/// control point before it and the incoming value of the first control
/// point at or after it.
pub fn mapping_array(points: &[SegmentPoint], size: usize) -> Result<Vec<f32>, PaletteError> {
    if size < 2 {
        return Err(PaletteError::InvalidSize { size });
    }

    validate(points)?;

    let scale = (size - 1) as f32;
    let positions: Vec<f32> = points.iter().map(|point| point.x * scale).collect();
    let last = points.len() - 1;

    let mut lut = vec![0.0; size];

    for (i, value) in lut.iter_mut().enumerate().take(size - 1).skip(1) {
        let target = i as f32;
        let upper = positions
            .iter()
            .position(|&x| target <= x)
            .unwrap_or(last)
            .max(1);
        let lower = upper - 1;

        let distance = (target - positions[lower]) / (positions[upper] - positions[lower]);
        *value = distance * (points[upper].y_in - points[lower].y_out) + points[lower].y_out;
    }

    lut[0] = points[0].y_out;
    lut[size - 1] = points[last].y_in;

    Ok(lut.into_iter().map(|value| value.clamp(0.0, 1.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_approx_eq(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {} to be close to {}", a, b);
    }

    #[test]
    fn test_linear_ramp() {
        let points = [SegmentPoint::new(0.0, 0.0, 0.0), SegmentPoint::new(1.0, 1.0, 1.0)];

        let lut = mapping_array(&points, 5).unwrap();

        assert_eq!(lut.len(), 5);
        for (i, value) in lut.iter().enumerate() {
            assert_approx_eq(*value, i as f32 / 4.0);
        }
    }

    #[test]
    fn test_endpoints_use_outgoing_then_incoming_values() {
        let points = [SegmentPoint::new(0.0, 0.9, 0.2), SegmentPoint::new(1.0, 0.7, 0.1)];

        let lut = mapping_array(&points, 3).unwrap();

        assert_eq!(lut[0], 0.2);
        assert_eq!(lut[2], 0.7);
        // halfway from 0.2 to 0.7
        assert_approx_eq(lut[1], 0.45);
    }

    #[test]
    fn test_discontinuity_switches_value() {
        // jumps from 0.027 to 0.25 at a quarter of the way
        let points = [
            SegmentPoint::new(0.0, 0.0, 0.0),
            SegmentPoint::new(0.0547, 1.0, 1.0),
            SegmentPoint::new(0.25, 0.027, 0.25),
            SegmentPoint::new(1.0, 1.0, 1.0),
        ];

        let lut = mapping_array(&points, 256).unwrap();

        assert_approx_eq(lut[63], 0.041_653);
        assert_approx_eq(lut[64], 0.250_980);
        assert_approx_eq(lut[10], 0.716_923);
    }

    #[test]
    fn test_values_are_clamped() {
        let points = [SegmentPoint::new(0.0, -1.0, -1.0), SegmentPoint::new(1.0, 2.0, 2.0)];

        let lut = mapping_array(&points, 256).unwrap();

        assert!(lut.iter().all(|value| (0.0..=1.0).contains(value)));
        assert_eq!(lut[0], 0.0);
        assert_eq!(lut[255], 1.0);
    }

    #[test]
    fn test_rejects_single_point() {
        let points = [SegmentPoint::new(0.0, 0.0, 0.0)];

        assert_eq!(
            mapping_array(&points, 256),
            Err(PaletteError::TooFewPoints { count: 1 })
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            mapping_array(&[], 256),
            Err(PaletteError::TooFewPoints { count: 0 })
        );
    }

    #[test]
    fn test_rejects_points_not_spanning_unit_interval() {
        let points = [SegmentPoint::new(0.1, 0.0, 0.0), SegmentPoint::new(1.0, 1.0, 1.0)];

        assert!(matches!(
            mapping_array(&points, 256),
            Err(PaletteError::InvalidEndpoints { .. })
        ));
    }

    #[test]
    fn test_rejects_decreasing_positions() {
        let points = [
            SegmentPoint::new(0.0, 0.0, 0.0),
            SegmentPoint::new(0.6, 1.0, 1.0),
            SegmentPoint::new(0.4, 1.0, 1.0),
            SegmentPoint::new(1.0, 1.0, 1.0),
        ];

        assert_eq!(
            mapping_array(&points, 256),
            Err(PaletteError::DecreasingPosition { index: 2 })
        );
    }

    #[test]
    fn test_rejects_tiny_size() {
        let points = [SegmentPoint::new(0.0, 0.0, 0.0), SegmentPoint::new(1.0, 1.0, 1.0)];

        assert_eq!(
            mapping_array(&points, 1),
            Err(PaletteError::InvalidSize { size: 1 })
        );
    }

    proptest! {
        #[test]
        fn mapping_array_takes_endpoint_values_and_stays_in_range(
            interior in prop::collection::vec((0.0f32..1.0, -0.5f32..1.5, -0.5f32..1.5), 0..6),
            first_out in -0.5f32..1.5,
            last_in in -0.5f32..1.5,
        ) {
            let mut interior = interior;
            interior.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut points = vec![SegmentPoint::new(0.0, 0.0, first_out)];
            points.extend(interior.iter().map(|&(x, y_in, y_out)| SegmentPoint::new(x, y_in, y_out)));
            points.push(SegmentPoint::new(1.0, last_in, 0.0));

            let lut = mapping_array(&points, 256).unwrap();

            prop_assert_eq!(lut.len(), 256);
            prop_assert_eq!(lut[0], first_out.clamp(0.0, 1.0));
            prop_assert_eq!(lut[255], last_in.clamp(0.0, 1.0));
            prop_assert!(lut.iter().all(|value| (0.0..=1.0).contains(value)));
        }
    }
}
