use crate::core::data::rgba::Rgba;
use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::functions::{FunctionChannels, channel_function, sample_function};
use crate::core::palettes::kinds::{PaletteDescriptor, PaletteKind};
use crate::core::palettes::segment::{SegmentPoint, mapping_array};

pub const PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    kind: PaletteKind,
    entries: Vec<Rgba>,
}

impl Palette {
    pub fn build(kind: PaletteKind) -> Result<Self, PaletteError> {
        let entries = match kind.descriptor() {
            PaletteDescriptor::Segments(channels) => {
                segment_entries(channels.red, channels.green, channels.blue)?
            }
            PaletteDescriptor::Functions(channels) => function_entries(channels)?,
        };

        Ok(Self { kind, entries })
    }

    #[must_use]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[must_use]
    pub fn entries(&self) -> &[Rgba] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colour for an escape time, normalised against `max_iterations` so
    /// points that never escape take the last entry.
    #[must_use]
    pub fn colour_for(&self, iterations: u32, max_iterations: u32) -> Rgba {
        let last = self.entries.len().saturating_sub(1);
        let index = if max_iterations == 0 {
            last
        } else {
            let t = iterations.min(max_iterations) as f32 / max_iterations as f32;
            (t * last as f32).round() as usize
        };

        self.entries.get(index).copied().unwrap_or_default()
    }
}

pub(crate) fn segment_entries(
    red: &[SegmentPoint],
    green: &[SegmentPoint],
    blue: &[SegmentPoint],
) -> Result<Vec<Rgba>, PaletteError> {
    Ok(opaque_entries(
        mapping_array(red, PALETTE_SIZE)?,
        mapping_array(green, PALETTE_SIZE)?,
        mapping_array(blue, PALETTE_SIZE)?,
    ))
}

pub(crate) fn function_entries(channels: FunctionChannels) -> Result<Vec<Rgba>, PaletteError> {
    Ok(opaque_entries(
        sample_function(channel_function(channels.red)?, PALETTE_SIZE)?,
        sample_function(channel_function(channels.green)?, PALETTE_SIZE)?,
        sample_function(channel_function(channels.blue)?, PALETTE_SIZE)?,
    ))
}

fn opaque_entries(red: Vec<f32>, green: Vec<f32>, blue: Vec<f32>) -> Vec<Rgba> {
    red.into_iter()
        .zip(green)
        .zip(blue)
        .map(|((r, g), b)| Rgba::opaque(r, g, b))
        .collect()
}
