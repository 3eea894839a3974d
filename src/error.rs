//! Crate-level error types.

use std::fmt;

/// Errors produced by the teaview crate.
///
/// The transform and visibility core is total over finite inputs and never
/// fails; errors arise only at the configuration and windowing edges.
#[derive(Debug)]
pub enum TeaviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TeaviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TeaviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TeaviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
