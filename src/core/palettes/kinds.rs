use crate::core::palettes::functions::FunctionChannels;
use crate::core::palettes::segment::{SegmentChannels, SegmentPoint};

const JET: SegmentChannels = SegmentChannels {
    red: &[
        SegmentPoint::new(0.0, 0.0, 0.0),
        SegmentPoint::new(0.35, 0.0, 0.0),
        SegmentPoint::new(0.66, 1.0, 1.0),
        SegmentPoint::new(0.89, 1.0, 1.0),
        SegmentPoint::new(1.0, 0.5, 0.5),
    ],
    green: &[
        SegmentPoint::new(0.0, 0.0, 0.0),
        SegmentPoint::new(0.125, 0.0, 0.0),
        SegmentPoint::new(0.375, 1.0, 1.0),
        SegmentPoint::new(0.64, 1.0, 1.0),
        SegmentPoint::new(0.91, 0.0, 0.0),
        SegmentPoint::new(1.0, 0.0, 0.0),
    ],
    blue: &[
        SegmentPoint::new(0.0, 0.5, 0.5),
        SegmentPoint::new(0.11, 1.0, 1.0),
        SegmentPoint::new(0.34, 1.0, 1.0),
        SegmentPoint::new(0.65, 0.0, 0.0),
        SegmentPoint::new(1.0, 0.0, 0.0),
    ],
};

const GIST_STERN: SegmentChannels = SegmentChannels {
    red: &[
        SegmentPoint::new(0.0, 0.0, 0.0),
        SegmentPoint::new(0.0547, 1.0, 1.0),
        SegmentPoint::new(0.250, 0.027, 0.250),
        SegmentPoint::new(1.0, 1.0, 1.0),
    ],
    green: &[
        SegmentPoint::new(0.0, 0.0, 0.0),
        SegmentPoint::new(1.0, 0.0, 0.0),
    ],
    blue: &[
        SegmentPoint::new(0.0, 0.0, 0.0),
        SegmentPoint::new(0.5, 1.0, 1.0),
        SegmentPoint::new(0.735, 0.0, 0.0),
        SegmentPoint::new(1.0, 0.0, 0.0),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteDescriptor {
    Segments(SegmentChannels),
    Functions(FunctionChannels),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Jet,
    GistStern,
    Ocean,
    Gnuplot,
    Gnuplot2,
}

impl PaletteKind {
    /// Catalog order; a palette index refers to a position in this list.
    pub const ALL: &'static [Self] = &[
        Self::Jet,
        Self::GistStern,
        Self::Ocean,
        Self::Gnuplot,
        Self::Gnuplot2,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Jet => "Jet",
            Self::GistStern => "Gist Stern",
            Self::Ocean => "Ocean",
            Self::Gnuplot => "Gnuplot",
            Self::Gnuplot2 => "Gnuplot 2",
        }
    }

    #[must_use]
    pub const fn descriptor(self) -> PaletteDescriptor {
        match self {
            Self::Jet => PaletteDescriptor::Segments(JET),
            Self::GistStern => PaletteDescriptor::Segments(GIST_STERN),
            Self::Ocean => PaletteDescriptor::Functions(FunctionChannels {
                red: 23,
                green: 28,
                blue: 3,
            }),
            Self::Gnuplot => PaletteDescriptor::Functions(FunctionChannels {
                red: 7,
                green: 5,
                blue: 15,
            }),
            Self::Gnuplot2 => PaletteDescriptor::Functions(FunctionChannels {
                red: 30,
                green: 31,
                blue: 32,
            }),
        }
    }
}
