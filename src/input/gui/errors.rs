use crate::controllers::playback::PlaybackError;
use crate::core::discovery::errors::DiscoveryError;
use crate::core::palettes::errors::PaletteError;
use crate::storage::preferences::PreferencesError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    Playback(PlaybackError),
    Palette(PaletteError),
    Discovery(DiscoveryError),
    Preferences(PreferencesError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::Playback(err) => write!(f, "playback error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::Discovery(err) => write!(f, "discovery error: {}", err),
            Self::Preferences(err) => write!(f, "preferences error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Playback(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Discovery(err) => Some(err),
            Self::Preferences(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<PlaybackError> for GuiError {
    fn from(err: PlaybackError) -> Self {
        Self::Playback(err)
    }
}

impl From<PaletteError> for GuiError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<DiscoveryError> for GuiError {
    fn from(err: DiscoveryError) -> Self {
        Self::Discovery(err)
    }
}

impl From<PreferencesError> for GuiError {
    fn from(err: PreferencesError) -> Self {
        Self::Preferences(err)
    }
}
