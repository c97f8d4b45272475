#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    /// Name of the shading program a render backend prepares for this kind.
    #[must_use]
    pub const fn program_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Mandelbrot => Self::Julia,
            Self::Julia => Self::Mandelbrot,
        }
    }
}
