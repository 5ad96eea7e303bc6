//! Error types for script parsing.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while reading or writing an action script.
#[derive(Debug)]
pub enum ScriptError {
    /// An I/O error from the underlying reader or writer.
    Io(io::Error),
    /// A line could not be parsed.
    Parse {
        /// 1-based line number of the offending line.
        line: u64,
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { line, detail } => write!(f, "line {line}: {detail}"),
        }
    }
}

impl Error for ScriptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
