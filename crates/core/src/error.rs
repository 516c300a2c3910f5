//! Error types for Stemma
//!
//! The stemming algorithm itself is total: every word of lowercase ASCII
//! letters produces a stem and anything else is passed through unchanged.
//! The variants below therefore only come from the collaborators around it:
//! configuration parsing, file I/O, and parsing of textual names.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Stemma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Stemma operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed or validated
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Unknown stemming variant name
    #[error("unknown variant '{0}' (expected 'original' or 'revised')")]
    InvalidVariant(String),

    /// Unknown case mode name
    #[error("unknown case mode '{0}' (expected 'lower' or 'preserve')")]
    InvalidCaseMode(String),

    /// Unknown output format name
    #[error("unknown output format '{0}' (expected 'text' or 'tokens')")]
    InvalidOutputFormat(String),

    /// Output could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Condition notation could not be parsed
    #[error("invalid condition '{0}'")]
    InvalidCondition(String),

    /// Failure while processing a specific line of a file (1-based)
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number
        line: usize,
        /// What went wrong on that line
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Build an `Io` error for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap this error with the 1-based line number it happened on.
    pub fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Check if this is an I/O error, looking through line wrappers
    pub fn is_io(&self) -> bool {
        match self {
            Error::Io { .. } => true,
            Error::Line { source, .. } => source.is_io(),
            _ => false,
        }
    }
}
