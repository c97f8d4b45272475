use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PPM (P6). Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;

        for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            writer.write_all(&pixel[..3])?;
        }

        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut writer)
    }
}
