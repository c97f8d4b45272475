use crate::controllers::data::draw_frame::DrawFrame;
use crate::controllers::ports::render_backend::{BackendError, ReadbackBackend, RenderBackend};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::presenters::software::rasterize::{rasterize, sample_offsets};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, trace};

/// CPU render backend. Programs are the fractal kinds' names, and a frame
/// can only be drawn with a program prepared for its sample count.
#[derive(Debug, Default)]
pub struct SoftwareBackend {
    prepared: HashSet<(&'static str, u32)>,
    pixel_buffer: PixelBuffer,
}

impl SoftwareBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_prepared(&self, name: &str, sample_count: u32) -> bool {
        self.prepared
            .iter()
            .any(|&(prepared, count)| prepared == name && count == sample_count)
    }
}

impl RenderBackend for SoftwareBackend {
    fn prepare_program(&mut self, name: &str, sample_count: u32) -> Result<(), BackendError> {
        let Some(kind) = FractalKind::ALL
            .iter()
            .find(|kind| kind.program_name() == name)
        else {
            return Err(BackendError::MissingProgram {
                name: name.to_string(),
            });
        };

        if sample_offsets(sample_count).is_none() {
            return Err(BackendError::UnsupportedSampleCount {
                count: sample_count,
            });
        }

        self.prepared.insert((kind.program_name(), sample_count));
        debug!(program = name, sample_count, "program prepared");

        Ok(())
    }

    fn draw(&mut self, frame: &DrawFrame<'_>) -> Result<(), BackendError> {
        if !self.is_prepared(frame.program, frame.sample_count) {
            return Err(BackendError::ProgramNotPrepared {
                name: frame.program.to_string(),
                sample_count: frame.sample_count,
            });
        }

        let start = Instant::now();
        rasterize(frame, &mut self.pixel_buffer)?;

        trace!(
            program = frame.program,
            width = self.pixel_buffer.width(),
            height = self.pixel_buffer.height(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "frame rasterized"
        );

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.pixel_buffer.width() != width || self.pixel_buffer.height() != height {
            self.pixel_buffer = PixelBuffer::new(width, height);
        }
    }
}

impl ReadbackBackend for SoftwareBackend {
    fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }
}
