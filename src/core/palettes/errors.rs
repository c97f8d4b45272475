use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteError {
    InvalidSize { size: usize },
    TooFewPoints { count: usize },
    InvalidEndpoints { first: f32, last: f32 },
    DecreasingPosition { index: usize },
    UnknownFunction { index: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "palette needs at least 2 entries, got {}", size)
            }
            Self::TooFewPoints { count } => {
                write!(f, "segment channel needs at least 2 control points, got {}", count)
            }
            Self::InvalidEndpoints { first, last } => {
                write!(
                    f,
                    "segment channel must span 0 to 1, spans {} to {}",
                    first, last
                )
            }
            Self::DecreasingPosition { index } => {
                write!(f, "control point {} is positioned before its predecessor", index)
            }
            Self::UnknownFunction { index } => {
                write!(f, "no channel function at index {}", index)
            }
        }
    }
}

impl Error for PaletteError {}
