use rayon::prelude::*;

use crate::controllers::data::draw_frame::DrawFrame;
use crate::controllers::ports::render_backend::BackendError;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::rgba::Rgba;
use crate::core::fractals::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

const SINGLE_SAMPLE: [(f32, f32); 1] = [(0.5, 0.5)];

// ordered 2x2 grid inside the pixel
const FOUR_SAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Sub-pixel sample positions for a sample count, `None` if unsupported.
#[must_use]
pub fn sample_offsets(sample_count: u32) -> Option<&'static [(f32, f32)]> {
    match sample_count {
        1 => Some(&SINGLE_SAMPLE),
        4 => Some(&FOUR_SAMPLES),
        _ => None,
    }
}

/// Shades every pixel of `buffer` for `frame`, one rayon task per row.
///
/// Row 0 is the top edge of the region. Each sample maps linearly between
/// the frame's corners, and the samples of a pixel are averaged after the
/// palette lookup.
pub fn rasterize(frame: &DrawFrame<'_>, buffer: &mut PixelBuffer) -> Result<(), BackendError> {
    let offsets = sample_offsets(frame.sample_count).ok_or(BackendError::UnsupportedSampleCount {
        count: frame.sample_count,
    })?;

    let width = buffer.width();
    let height = buffer.height();
    if width == 0 || height == 0 {
        return Ok(());
    }

    let algorithm: Box<dyn FractalAlgorithm> = match frame.julia_constant {
        Some(constant) => Box::new(JuliaAlgorithm::new(constant, frame.max_iterations)),
        None => Box::new(MandelbrotAlgorithm::new(frame.max_iterations)),
    };

    let bottom_left = frame.bottom_left();
    let top_right = frame.top_right();
    let extent_real = top_right.real - bottom_left.real;
    let extent_imag = top_right.imag - bottom_left.imag;

    let row_bytes = width as usize * BYTES_PER_PIXEL;

    buffer
        .buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(row, pixels)| {
            for (column, pixel) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let mut sum = Rgba::default();

                for &(dx, dy) in offsets {
                    let point = Complex::new(
                        bottom_left.real + (column as f32 + dx) / width as f32 * extent_real,
                        top_right.imag - (row as f32 + dy) / height as f32 * extent_imag,
                    );
                    let colour = frame
                        .palette
                        .colour_for(algorithm.compute(point), frame.max_iterations);

                    sum.r += colour.r;
                    sum.g += colour.g;
                    sum.b += colour.b;
                    sum.a += colour.a;
                }

                let samples = offsets.len() as f32;
                let average = Rgba {
                    r: sum.r / samples,
                    g: sum.g / samples,
                    b: sum.b / samples,
                    a: sum.a / samples,
                };

                pixel.copy_from_slice(&average.to_rgba8());
            }
        });

    Ok(())
}
