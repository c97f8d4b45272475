use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Squared modulus at which an orbit counts as escaped.
pub const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Iterates `z ← z² + c` starting from `z` and returns the first step at
/// which `|z|² >= 4`, or `max_iterations` if the orbit never escapes.
///
/// No special handling for NaN: a NaN orbit never compares as escaped and
/// runs to `max_iterations`.
#[must_use]
pub fn escape_time(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let iterations = (0..max_iterations).try_fold(z, |z, iteration| {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z.square() + c)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
