//! Stemmer configuration.
//!
//! A `StemmerConfig` is built in code with the builder methods or loaded
//! from a TOML file. Every key is optional:
//!
//! ```toml
//! variant = "revised"
//! case_mode = "preserve"
//! output = "tokens"
//! clean_non_alphanumeric = true
//! irregular_forms = false
//! replace_invalid_utf8 = true
//! ```

use crate::error::{Error, Result};
use crate::types::{CaseMode, OutputFormat, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options for a stemming session.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use stemma_core::{CaseMode, StemmerConfig, Variant};
///
/// let config = StemmerConfig::new()
///     .variant(Variant::Revised)
///     .case_mode(CaseMode::Preserve);
/// assert_eq!(config.variant, Variant::Revised);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StemmerConfig {
    /// Rule tables to run.
    pub variant: Variant,
    /// Lowercase output or restore the input's casing pattern.
    pub case_mode: CaseMode,
    /// Presentation of stemmed documents.
    pub output: OutputFormat,
    /// Replace punctuation and symbols with spaces before stemming documents.
    pub clean_non_alphanumeric: bool,
    /// Consult the per-variant irregular-forms table before the rules.
    pub irregular_forms: bool,
    /// Decode file lines lossily, substituting U+FFFD for invalid UTF-8,
    /// instead of failing on the first bad line.
    pub replace_invalid_utf8: bool,
}

impl StemmerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule variant.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the case mode.
    pub fn case_mode(mut self, mode: CaseMode) -> Self {
        self.case_mode = mode;
        self
    }

    /// Set the document output format.
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Enable or disable the non-alphanumeric cleaning pass.
    pub fn clean_non_alphanumeric(mut self, enabled: bool) -> Self {
        self.clean_non_alphanumeric = enabled;
        self
    }

    /// Enable or disable the irregular-forms table.
    pub fn irregular_forms(mut self, enabled: bool) -> Self {
        self.irregular_forms = enabled;
        self
    }

    /// Enable or disable lossy decoding of file input.
    pub fn replace_invalid_utf8(mut self, enabled: bool) -> Self {
        self.replace_invalid_utf8 = enabled;
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Render this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Original,
            case_mode: CaseMode::Lower,
            output: OutputFormat::Text,
            clean_non_alphanumeric: false,
            irregular_forms: true,
            replace_invalid_utf8: false,
        }
    }
}
