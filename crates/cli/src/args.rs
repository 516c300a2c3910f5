//! Command line argument parsing for the stemma CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stemma_core::{CaseMode, OutputFormat, StemmerConfig, Variant};

/// stemma - Porter stemming for words, text and files
#[derive(Parser, Debug, Clone)]
#[command(name = "stemma")]
#[command(about = "Reduce English words to their Porter stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct StemmaArgs {
    /// Verbosity level (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// TOML configuration file; flags below override its values
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rule variant
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    /// Keep the casing pattern of each input word
    #[arg(long, global = true)]
    pub preserve_case: bool,

    /// Strip punctuation and symbols before stemming text
    #[arg(long = "clean-non-alpha", global = true)]
    pub clean_non_alpha: bool,

    /// Print stems as a JSON token list instead of rewritten text
    #[arg(long, global = true)]
    pub tokens: bool,

    /// Skip the irregular-forms table
    #[arg(long, global = true)]
    pub no_irregular: bool,

    /// Replace invalid UTF-8 in input files instead of stopping
    #[arg(long, global = true)]
    pub lossy: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemmaArgs {
    /// Log filter implied by `-v`/`-q` when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Overlay the command line flags on `config`.
    pub fn apply(&self, mut config: StemmerConfig) -> StemmerConfig {
        if let Some(mode) = self.mode {
            config = config.variant(mode.into());
        }
        if self.preserve_case {
            config = config.case_mode(CaseMode::Preserve);
        }
        if self.clean_non_alpha {
            config = config.clean_non_alphanumeric(true);
        }
        if self.tokens {
            config = config.output(OutputFormat::Tokens);
        }
        if self.no_irregular {
            config = config.irregular_forms(false);
        }
        if self.lossy {
            config = config.replace_invalid_utf8(true);
        }
        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem one or more words
    Word(WordArgs),

    /// Stem a piece of text
    Text(TextArgs),

    /// Stem a text file line by line
    File(FileArgs),

    /// Walk through the stemmer's behaviour on sample input
    Demo,

    /// Print example code for using the library
    Example,
}

/// Arguments for `word`
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for `text`
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to stem
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for `file`
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Input file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Rule variant names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Porter's original rules
    Original,
    /// Original rules with the revised Step 1a and 1c
    Revised,
}

impl From<ModeArg> for Variant {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Original => Variant::Original,
            ModeArg::Revised => Variant::Revised,
        }
    }
}
