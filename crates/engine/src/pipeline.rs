//! The `Stemmer` facade
//!
//! Wraps the core algorithm with everything a caller needs for real text:
//! the irregular-forms table, case handling, document segmentation, the
//! optional cleaning pass, output rendering and streaming file processing.
//!
//! ```
//! use stemma_core::{CaseMode, StemmerConfig};
//! use stemma_engine::Stemmer;
//!
//! let stemmer = Stemmer::new(StemmerConfig::new().case_mode(CaseMode::Preserve));
//! assert_eq!(stemmer.stem_word("RUNNING"), "RUN");
//! assert_eq!(stemmer.stem_document("Cats running."), "Cat run.");
//! ```

use crate::stemmer::{irregular, stem};
use crate::text::{apply_case_mode, clean_non_alphanumeric, rewrite_words, words};
use rayon::prelude::*;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use stemma_core::{CaseMode, Error, OutputFormat, Result, StemmerConfig, Variant};
use tracing::{debug, info};

/// Batches at least this large are stemmed on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 256;

/// Files larger than this get periodic progress logging.
const PROGRESS_MIN_BYTES: u64 = 1024 * 1024;
const PROGRESS_EVERY_LINES: usize = 10_000;

/// Stemming session bound to one configuration.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    config: StemmerConfig,
}

/// A stemmed document in the configured presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// The document with every word replaced by its stem.
    Text(String),
    /// Only the stems, in order.
    Tokens(Vec<String>),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(text) => f.write_str(text),
            Rendered::Tokens(tokens) => {
                let json = serde_json::to_string(tokens).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// Counters from [`Stemmer::stem_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Lines read.
    pub lines: usize,
    /// Bytes read from the input.
    pub bytes_in: u64,
    /// Bytes written to the output.
    pub bytes_out: u64,
}

impl Stemmer {
    /// Create a stemmer with the given configuration.
    pub fn new(config: StemmerConfig) -> Self {
        debug!(
            target: "stemma::engine",
            variant = %config.variant,
            case_mode = %config.case_mode,
            output = %config.output,
            clean = config.clean_non_alphanumeric,
            irregular = config.irregular_forms,
            "stemmer configured"
        );
        Self { config }
    }

    /// Default configuration with `variant` selected.
    pub fn with_variant(variant: Variant) -> Self {
        Self::new(StemmerConfig::new().variant(variant))
    }

    /// The configuration this stemmer was built with.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stem one word.
    ///
    /// The irregular-forms table is consulted first (when enabled), then
    /// the rules. Words containing anything other than ASCII letters skip
    /// the rules; they are only lowercased in `CaseMode::Lower`.
    pub fn stem_word(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            debug!(target: "stemma::engine", word, "not ASCII letters, rules skipped");
            return match self.config.case_mode {
                CaseMode::Lower => word.to_lowercase(),
                CaseMode::Preserve => word.to_string(),
            };
        }

        let lower = word.to_ascii_lowercase();
        let irregular = if self.config.irregular_forms {
            irregular::lookup(&lower, self.config.variant)
        } else {
            None
        };
        let stemmed = match irregular {
            Some(form) => form.to_string(),
            None => stem(&lower, self.config.variant),
        };
        apply_case_mode(self.config.case_mode, word, stemmed)
    }

    /// Stem a batch of words, preserving order.
    pub fn stem_tokens<S>(&self, tokens: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if tokens.len() >= PARALLEL_THRESHOLD {
            tokens
                .par_iter()
                .map(|t| self.stem_word(t.as_ref()))
                .collect()
        } else {
            tokens.iter().map(|t| self.stem_word(t.as_ref())).collect()
        }
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.clean_non_alphanumeric {
            Cow::Owned(clean_non_alphanumeric(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Replace every word of `text` with its stem, leaving everything
    /// between words untouched.
    pub fn stem_document(&self, text: &str) -> String {
        let text = self.prepare(text);
        rewrite_words(&text, |w| self.stem_word(w))
    }

    /// The stems of the words of `text`, in order.
    pub fn stem_document_tokens(&self, text: &str) -> Vec<String> {
        let text = self.prepare(text);
        words(&text).map(|w| self.stem_word(w)).collect()
    }

    /// Stem `text` in the configured output format.
    pub fn render(&self, text: &str) -> Rendered {
        match self.config.output {
            OutputFormat::Text => Rendered::Text(self.stem_document(text)),
            OutputFormat::Tokens => Rendered::Tokens(self.stem_document_tokens(text)),
        }
    }

    /// Stem one file line, keeping its line ending.
    fn stem_line(&self, line: &str) -> String {
        let body = line.trim_end_matches(['\n', '\r']);
        let ending = &line[body.len()..];
        let mut out = self.stem_document(body);
        out.push_str(ending);
        out
    }

    /// Stream the stemmed lines of a file.
    ///
    /// Each line is stemmed as a document and keeps its line ending.
    /// Opening the file fails eagerly; read errors surface on the line
    /// where they occur and end the iteration. Invalid UTF-8 is such an
    /// error unless `replace_invalid_utf8` is set, in which case the bad
    /// bytes become U+FFFD and reading goes on.
    pub fn stem_file_lines(&self, path: impl AsRef<Path>) -> Result<StemmedLines> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(StemmedLines {
            stemmer: self.clone(),
            reader: BufReader::new(file),
            path: path.to_path_buf(),
            line: 0,
            buf: Vec::new(),
            done: false,
            bytes: 0,
        })
    }

    /// Stem a whole file into `writer`.
    ///
    /// In `Tokens` mode each input line becomes one JSON array line.
    pub fn stem_file<W: Write>(&self, input: impl AsRef<Path>, mut writer: W) -> Result<FileReport> {
        let input = input.as_ref();
        let total = std::fs::metadata(input)
            .map_err(|e| Error::io(input, e))?
            .len();
        let show_progress = total > PROGRESS_MIN_BYTES;
        let write_err = |e: std::io::Error| Error::io("<output>", e);

        let mut report = FileReport::default();
        let mut lines = self.stem_file_lines(input)?;
        while let Some(line) = lines.next() {
            let stemmed = line?;
            report.lines += 1;
            report.bytes_in = lines.bytes_read();

            let out = match self.config.output {
                OutputFormat::Text => stemmed,
                OutputFormat::Tokens => {
                    let tokens: Vec<&str> = words(&stemmed).collect();
                    let mut json = serde_json::to_string(&tokens)
                        .map_err(|e| Error::Serialize(e.to_string()).at_line(report.lines))?;
                    json.push('\n');
                    json
                }
            };
            writer.write_all(out.as_bytes()).map_err(write_err)?;
            report.bytes_out += out.len() as u64;

            if show_progress && report.lines % PROGRESS_EVERY_LINES == 0 {
                info!(
                    target: "stemma::file",
                    lines = report.lines,
                    percent = report.bytes_in * 100 / total,
                    "progress"
                );
            }
        }
        writer.flush().map_err(write_err)?;

        info!(
            target: "stemma::file",
            path = %input.display(),
            lines = report.lines,
            bytes_in = report.bytes_in,
            bytes_out = report.bytes_out,
            "file stemmed"
        );
        Ok(report)
    }
}

/// Iterator returned by [`Stemmer::stem_file_lines`].
#[derive(Debug)]
pub struct StemmedLines {
    stemmer: Stemmer,
    reader: BufReader<File>,
    path: PathBuf,
    line: usize,
    buf: Vec<u8>,
    done: bool,
    bytes: u64,
}

impl StemmedLines {
    /// Bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl Iterator for StemmedLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        let n = match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(Error::io(&self.path, e).at_line(self.line + 1)));
            }
        };
        self.line += 1;
        self.bytes += n as u64;

        let text = if self.stemmer.config.replace_invalid_utf8 {
            String::from_utf8_lossy(&self.buf)
        } else {
            match std::str::from_utf8(&self.buf) {
                Ok(text) => Cow::Borrowed(text),
                Err(_) => {
                    self.done = true;
                    let e = std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "stream did not contain valid UTF-8",
                    );
                    return Some(Err(Error::io(&self.path, e).at_line(self.line)));
                }
            }
        };
        Some(Ok(self.stemmer.stem_line(&text)))
    }
}
