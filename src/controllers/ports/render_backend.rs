use crate::controllers::data::draw_frame::DrawFrame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    MissingProgram { name: String },
    UnsupportedSampleCount { count: u32 },
    ProgramNotPrepared { name: String, sample_count: u32 },
    Surface(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingProgram { name } => write!(f, "no shading program named `{}`", name),
            Self::UnsupportedSampleCount { count } => {
                write!(f, "sample count {} is not supported", count)
            }
            Self::ProgramNotPrepared { name, sample_count } => {
                write!(
                    f,
                    "program `{}` was not prepared for {} samples per pixel",
                    name, sample_count
                )
            }
            Self::Surface(message) => write!(f, "render surface error: {}", message),
        }
    }
}

impl Error for BackendError {}

/// The device side of frame production: prepares one program per fractal
/// kind up front and draws frames on request.
pub trait RenderBackend {
    fn prepare_program(&mut self, name: &str, sample_count: u32) -> Result<(), BackendError>;

    fn draw(&mut self, frame: &DrawFrame<'_>) -> Result<(), BackendError>;

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Backends whose output stays in memory the caller can read.
pub trait ReadbackBackend: RenderBackend {
    fn pixel_buffer(&self) -> &PixelBuffer;
}

pub fn prepare_programs<B: RenderBackend + ?Sized>(
    backend: &mut B,
    sample_count: u32,
) -> Result<(), BackendError> {
    for kind in FractalKind::ALL {
        backend.prepare_program(kind.program_name(), sample_count)?;
    }

    Ok(())
}
