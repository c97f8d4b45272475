use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGBA8 image, top row first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, buffer: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);

        Some(pixel)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
