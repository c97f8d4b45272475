use crate::controllers::ports::render_backend::BackendError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    Backend(BackendError),
    UnknownPalette { index: usize },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "render backend failed: {}", err),
            Self::UnknownPalette { index } => write!(f, "no palette at index {}", index),
        }
    }
}

impl Error for PlaybackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::UnknownPalette { .. } => None,
        }
    }
}

impl From<BackendError> for PlaybackError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}
