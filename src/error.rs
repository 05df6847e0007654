//! Crate-level error types.

use std::fmt;

/// Errors produced by the viewcam crate.
///
/// Camera math itself never fails; only configuration I/O and parsing of
/// user-supplied text can.
#[derive(Debug)]
pub enum ViewcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A camera mode name that matches no known mode.
    UnknownMode(String),
}

impl fmt::Display for ViewcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownMode(name) => {
                write!(f, "unknown camera mode: {name:?}")
            }
        }
    }
}

impl std::error::Error for ViewcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
