//! Session-level choices for a stemmer.
//!
//! A `Variant`, a `CaseMode` and an `OutputFormat` are fixed once per
//! stemming session and passed explicitly; nothing here is global state.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule tables the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Porter (1980) as distributed in the author's reference implementation (default).
    #[default]
    Original,
    /// The original tables plus the NLTK-style refinements to steps 1a and 1c.
    Revised,
}

impl Variant {
    /// Both variants, original first.
    pub const ALL: [Variant; 2] = [Variant::Original, Variant::Revised];

    /// Lowercase name used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::Revised => "revised",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" | "porter" => Ok(Variant::Original),
            "revised" | "nltk" | "nltk_extensions" => Ok(Variant::Revised),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}

/// How the casing of the input word is reflected in the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Fold to lowercase and return lowercase stems (default).
    #[default]
    Lower,
    /// Fold to lowercase for the rules, then restore the original casing
    /// pattern onto the surviving characters.
    Preserve,
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Lower => f.write_str("lower"),
            CaseMode::Preserve => f.write_str("preserve"),
        }
    }
}

impl FromStr for CaseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            "preserve" => Ok(CaseMode::Preserve),
            _ => Err(Error::InvalidCaseMode(s.to_string())),
        }
    }
}

/// Shape of a stemmed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The document with every word replaced by its stem (default).
    #[default]
    Text,
    /// The ordered list of stems, separators dropped.
    Tokens,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Tokens => f.write_str("tokens"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "tokens" => Ok(OutputFormat::Tokens),
            _ => Err(Error::InvalidOutputFormat(s.to_string())),
        }
    }
}
