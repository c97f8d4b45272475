use crate::core::data::complex::Complex;
use crate::core::data::configuration::Configuration;
use crate::core::data::region::Region;

/// Points of a `grid_size` x `grid_size` lattice strictly inside `region`,
/// bottom row first and left to right within a row.
pub fn interior_grid(region: &Region, grid_size: usize) -> impl Iterator<Item = Complex> {
    let bottom_left = region.bottom_left();
    let divisions = (grid_size + 1) as f32;
    let step_x = region.width() / divisions;
    let step_y = region.height() / divisions;

    (1..=grid_size).flat_map(move |row| {
        (1..=grid_size).map(move |column| {
            Complex::new(
                bottom_left.real + column as f32 * step_x,
                bottom_left.imag + row as f32 * step_y,
            )
        })
    })
}

/// Escape times over the interior grid of the configuration's region.
#[must_use]
pub fn sample_region(configuration: &Configuration, grid_size: usize) -> Vec<u32> {
    let algorithm = configuration.algorithm();

    interior_grid(&configuration.region, grid_size)
        .map(|point| algorithm.compute(point))
        .collect()
}
