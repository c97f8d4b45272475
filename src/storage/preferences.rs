use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

pub const ANTI_ALIASED_SAMPLE_COUNT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(rename = "enable-msaa")]
    pub anti_aliasing: bool,
}

impl Preferences {
    /// Samples per pixel the render backend should use.
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        if self.anti_aliasing {
            ANTI_ALIASED_SAMPLE_COUNT
        } else {
            1
        }
    }
}

#[derive(Debug)]
pub enum PreferencesError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preferences file error: {}", err),
            Self::Parse(err) => write!(f, "preferences file is malformed: {}", err),
        }
    }
}

impl Error for PreferencesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for PreferencesError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PreferencesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError>;

    fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError>;
}

/// Preferences kept as a JSON document on disk. A missing file reads as
/// the defaults.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Preferences::default());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, contents)?;

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    preferences: Mutex<Preferences>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences: Mutex::new(preferences),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        Ok(*self
            .preferences
            .lock()
            .unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferencesError> {
        *self
            .preferences
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = *preferences;

        Ok(())
    }
}
