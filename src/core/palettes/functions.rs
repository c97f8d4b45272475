use crate::core::palettes::errors::PaletteError;
use std::f32::consts::PI;

pub type ChannelFunction = fn(f32) -> f32;

/// The gnuplot `rgbformulae` catalog, addressed by position.
pub static GNUPLOT_FUNCTIONS: [ChannelFunction; 37] = [
    |_| 0.0,
    |_| 0.5,
    |_| 1.0,
    |x| x,
    |x| x.powi(2),
    |x| x.powi(3),
    |x| x.powi(4),
    |x| x.sqrt(),
    |x| x.sqrt().sqrt(),
    |x| (x * PI / 2.0).sin(),
    |x| (x * PI / 2.0).cos(),
    |x| (x - 0.5).abs(),
    |x| (2.0 * x - 1.0).powi(2),
    |x| (x * PI).sin(),
    |x| (x * PI).cos().abs(),
    |x| (x * 2.0 * PI).sin(),
    |x| (x * 2.0 * PI).cos(),
    |x| (x * 2.0 * PI).sin().abs(),
    |x| (x * 2.0 * PI).cos().abs(),
    |x| (x * 4.0 * PI).sin().abs(),
    |x| (x * 4.0 * PI).cos().abs(),
    |x| 3.0 * x,
    |x| 3.0 * x - 1.0,
    |x| 3.0 * x - 2.0,
    |x| (3.0 * x - 1.0).abs(),
    |x| (3.0 * x - 2.0).abs(),
    |x| (3.0 * x - 1.0) / 2.0,
    |x| (3.0 * x - 2.0) / 2.0,
    |x| ((3.0 * x - 1.0) / 2.0).abs(),
    |x| ((3.0 * x - 2.0) / 2.0).abs(),
    |x| x / 0.32 - 0.78125,
    |x| 2.0 * x - 0.84,
    |x| {
        if x < 0.25 {
            4.0 * x
        } else if x < 0.92 {
            -2.0 * x + 1.84
        } else {
            x / 0.08 - 11.5
        }
    },
    |x| (2.0 * x - 0.5).abs(),
    |x| 2.0 * x,
    |x| 2.0 * x - 0.5,
    |x| 2.0 * x - 1.0,
];

/// Indices into [`GNUPLOT_FUNCTIONS`] for each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionChannels {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

pub fn channel_function(index: usize) -> Result<ChannelFunction, PaletteError> {
    GNUPLOT_FUNCTIONS
        .get(index)
        .copied()
        .ok_or(PaletteError::UnknownFunction { index })
}

/// `size` evenly spaced values from 0 to 1. The last value is exactly 1.
#[must_use]
pub fn linear_spaced(size: usize) -> Vec<f32> {
    if size == 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![1.0];
    }

    let step = 1.0 / (size - 1) as f32;
    let mut values: Vec<f32> = (0..size).map(|i| i as f32 * step).collect();
    values[size - 1] = 1.0;

    values
}

pub fn sample_function(function: ChannelFunction, size: usize) -> Result<Vec<f32>, PaletteError> {
    if size < 2 {
        return Err(PaletteError::InvalidSize { size });
    }

    Ok(linear_spaced(size)
        .into_iter()
        .map(|t| function(t).clamp(0.0, 1.0))
        .collect())
}
