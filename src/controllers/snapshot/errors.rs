use crate::controllers::ports::render_backend::BackendError;
use crate::core::discovery::errors::DiscoveryError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SnapshotError {
    Backend(BackendError),
    Discovery(DiscoveryError),
    UnknownPalette { index: usize },
    Io(io::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(err) => write!(f, "render backend failed: {}", err),
            Self::Discovery(err) => write!(f, "discovery failed: {}", err),
            Self::UnknownPalette { index } => write!(f, "no palette at index {}", index),
            Self::Io(err) => write!(f, "could not write snapshot: {}", err),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err),
            Self::Discovery(err) => Some(err),
            Self::UnknownPalette { .. } => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<BackendError> for SnapshotError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
