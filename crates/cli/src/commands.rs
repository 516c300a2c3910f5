//! Command implementations for the stemma CLI.

use crate::args::{Command, FileArgs, StemmaArgs, TextArgs, WordArgs};
use crate::demo;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use stemma_core::StemmerConfig;
use stemma_engine::Stemmer;
use tracing::info;

/// Build the stemmer from the config file (if any) and the flags.
pub fn build_stemmer(args: &StemmaArgs) -> Result<Stemmer> {
    let base = match &args.config {
        Some(path) => StemmerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => StemmerConfig::default(),
    };
    Ok(Stemmer::new(args.apply(base)))
}

/// Execute a CLI command, writing results to `out`.
pub fn execute_command<W: Write>(args: &StemmaArgs, out: &mut W) -> Result<()> {
    let stemmer = build_stemmer(args)?;
    match &args.command {
        Command::Word(word_args) => stem_words(&stemmer, word_args, out),
        Command::Text(text_args) => stem_text(&stemmer, text_args, out),
        Command::File(file_args) => stem_file(&stemmer, file_args, out),
        Command::Demo => demo::run_demo(&stemmer, out).context("writing demo"),
        Command::Example => demo::print_example(out).context("writing example"),
    }
}

fn stem_words<W: Write>(stemmer: &Stemmer, args: &WordArgs, out: &mut W) -> Result<()> {
    let stems = stemmer.stem_tokens(&args.words);
    if stemmer.config().output == stemma_core::OutputFormat::Tokens {
        serde_json::to_writer(&mut *out, &stems)?;
        writeln!(out)?;
        return Ok(());
    }
    for (word, stem) in args.words.iter().zip(&stems) {
        writeln!(out, "{:20} -> {}", word, stem)?;
    }
    Ok(())
}

fn stem_text<W: Write>(stemmer: &Stemmer, args: &TextArgs, out: &mut W) -> Result<()> {
    writeln!(out, "{}", stemmer.render(&args.text))?;
    Ok(())
}

fn stem_file<W: Write>(stemmer: &Stemmer, args: &FileArgs, out: &mut W) -> Result<()> {
    let config = stemmer.config();
    eprintln!(
        "Stemming {} (mode: {}, case: {}, clean: {})",
        args.input.display(),
        config.variant,
        config.case_mode,
        config.clean_non_alphanumeric
    );

    let report = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let report = stemmer.stem_file(&args.input, BufWriter::new(file))?;
            info!(target: "stemma::file", output = %path.display(), "output written");
            report
        }
        None => stemmer.stem_file(&args.input, &mut *out)?,
    };

    eprintln!(
        "Processed {} lines ({} bytes in, {} bytes out)",
        report.lines, report.bytes_in, report.bytes_out
    );
    Ok(())
}

/// Run `args` against stdout.
pub fn run(args: &StemmaArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    execute_command(args, &mut lock)?;
    lock.flush()?;
    Ok(())
}
