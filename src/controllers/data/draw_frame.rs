use crate::core::data::complex::Complex;
use crate::core::data::configuration::Configuration;
use crate::core::data::region::Region;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::palettes::palette::Palette;

/// A clip-space corner paired with the point of the plane it maps to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalVertex {
    pub position: [f32; 2],
    pub region: [f32; 2],
}

/// Triangle-strip order: top right, top left, bottom right, bottom left.
#[must_use]
pub fn region_vertices(region: &Region) -> [FractalVertex; 4] {
    let bottom_left = region.bottom_left();
    let top_right = region.top_right();

    [
        FractalVertex {
            position: [1.0, 1.0],
            region: [top_right.real, top_right.imag],
        },
        FractalVertex {
            position: [-1.0, 1.0],
            region: [bottom_left.real, top_right.imag],
        },
        FractalVertex {
            position: [1.0, -1.0],
            region: [top_right.real, bottom_left.imag],
        },
        FractalVertex {
            position: [-1.0, -1.0],
            region: [bottom_left.real, bottom_left.imag],
        },
    ]
}

/// Everything a backend needs for one frame. Built per redraw and consumed
/// once.
#[derive(Debug, Clone, Copy)]
pub struct DrawFrame<'a> {
    pub fractal_kind: FractalKind,
    pub program: &'static str,
    pub vertices: [FractalVertex; 4],
    pub max_iterations: u32,
    pub palette: &'a Palette,
    pub julia_constant: Option<Complex>,
    pub sample_count: u32,
}

impl<'a> DrawFrame<'a> {
    #[must_use]
    pub fn new(configuration: &Configuration, palette: &'a Palette, sample_count: u32) -> Self {
        let julia_constant = match configuration.fractal_kind {
            FractalKind::Mandelbrot => None,
            FractalKind::Julia => Some(configuration.julia_constant),
        };

        Self {
            fractal_kind: configuration.fractal_kind,
            program: configuration.fractal_kind.program_name(),
            vertices: region_vertices(&configuration.region),
            max_iterations: configuration.max_iterations,
            palette,
            julia_constant,
            sample_count,
        }
    }

    #[must_use]
    pub fn bottom_left(&self) -> Complex {
        let [real, imag] = self.vertices[3].region;
        Complex::new(real, imag)
    }

    #[must_use]
    pub fn top_right(&self) -> Complex {
        let [real, imag] = self.vertices[0].region;
        Complex::new(real, imag)
    }
}
