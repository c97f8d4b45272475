use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryError {
    InvalidLimits { field: &'static str },
    Exhausted { attempts: u32 },
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimits { field } => {
                write!(f, "discovery limit `{}` is out of range", field)
            }
            Self::Exhausted { attempts } => {
                write!(
                    f,
                    "no interesting configuration found after {} attempts",
                    attempts
                )
            }
        }
    }
}

impl Error for DiscoveryError {}
