//! Crate-level error types.

use std::fmt;

/// Errors produced by the orientation-overlay crate.
///
/// Interaction itself never fails: out-of-range configuration is clamped
/// and disabling always succeeds. Errors only arise from lifecycle calls
/// made without a host and from reading or writing options files.
#[derive(Debug)]
pub enum OverlayError {
    /// The widget was enabled before a host surface was attached.
    NoHost,
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHost => {
                write!(f, "a host surface must be attached before enabling")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
