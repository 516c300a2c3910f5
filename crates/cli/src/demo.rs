//! The `demo` and `example` commands.

use std::io::{self, Write};
use stemma_core::{CaseMode, StemmerConfig};
use stemma_engine::Stemmer;

const DEMO_WORDS: &[&str] = &[
    "running",
    "flies",
    "happily",
    "caresses",
    "ponies",
    "cats",
    "agreed",
    "plastered",
    "motoring",
    "hoping",
    "hopping",
    "fizzed",
    "failing",
    "filing",
    "happy",
    "sky",
    "relational",
    "conditional",
    "vilely",
    "analogously",
    "vietnamization",
    "predication",
    "operator",
    "feudalism",
    "decisiveness",
    "hopefulness",
    "callousness",
    "formality",
    "sensitivity",
    "sensibility",
];

const DEMO_DOCUMENT: &str = "The boys are running quickly through the fields. ice
cream. They were hoping to catch butterflies but can't, but the flies
kept bothering them. Happily, they enjoyed their day anyway!";

const DEMO_TOKENS: &[&str] = &["The", "children", "were", "playing", "happily", "outside"];

const SPECIAL_WORDS: &[&str] = &["sky", "skies", "news", "dying", "lying"];

const SHORT_WORDS: &[&str] = &["am", "is", "be", "we", "at", "I", "a"];

const EXAMPLE_CODE: &str = r#"use stemma::{CaseMode, Stemmer, StemmerConfig, Variant};

fn main() {
    // Default: Original rules, lowercase output
    let stemmer = Stemmer::default();
    assert_eq!(stemmer.stem_word("running"), "run");

    // Revised rules with the casing of the input kept
    let config = StemmerConfig::new()
        .variant(Variant::Revised)
        .case_mode(CaseMode::Preserve);
    let stemmer = Stemmer::new(config);
    println!("{}", stemmer.stem_document("The Boys were Running!"));

    // Token lists
    let stems = stemmer.stem_tokens(&["Fishes", "flies", "happily"]);
    println!("{:?}", stems);
}
"#;

fn rule<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    rule(out, 50)
}

/// Walk through word, document and token stemming with `stemmer`'s
/// configuration, contrasting lowercase and case-preserving output.
pub fn run_demo<W: Write>(stemmer: &Stemmer, out: &mut W) -> io::Result<()> {
    let config = stemmer.config().clone();
    let lower = Stemmer::new(config.clone().case_mode(CaseMode::Lower));
    let preserve = Stemmer::new(config.clone().case_mode(CaseMode::Preserve));
    let cleaned = Stemmer::new(StemmerConfig {
        clean_non_alphanumeric: true,
        ..config.clone()
    });

    writeln!(out, "Stemma - Live Demonstration (mode: {})", config.variant)?;
    if config.case_mode == CaseMode::Preserve {
        writeln!(out, "(Case preservation mode highlighted)")?;
    }
    writeln!(out, "{}", "=".repeat(60))?;

    section(out, "1. Case Handling")?;
    let word = "Fishes";
    writeln!(out, "Default (lowercase): '{}' -> '{}'", word, lower.stem_word(word))?;
    writeln!(out, "Preserve case:       '{}' -> '{}'", word, preserve.stem_word(word))?;

    section(out, "2. Individual Words")?;
    for (word, stem) in DEMO_WORDS.iter().zip(stemmer.stem_tokens(DEMO_WORDS)) {
        writeln!(out, "{:20} -> {}", word, stem)?;
    }

    section(out, "3. Document Stemming")?;
    writeln!(out, "Original:\n{}", DEMO_DOCUMENT)?;
    writeln!(out, "\nStemmed:\n{}", stemmer.stem_document(DEMO_DOCUMENT))?;
    writeln!(out, "\nStemmed & Cleaned:\n{}", cleaned.stem_document(DEMO_DOCUMENT))?;

    section(out, "4. Token Lists")?;
    writeln!(out, "Original tokens: {:?}", DEMO_TOKENS)?;
    writeln!(out, "Lowercase:       {:?}", lower.stem_tokens(DEMO_TOKENS))?;
    writeln!(out, "Preserve case:   {:?}", preserve.stem_tokens(DEMO_TOKENS))?;

    section(out, "5. Special Cases")?;
    writeln!(out, "Irregular forms:")?;
    for word in SPECIAL_WORDS {
        writeln!(out, "{:15} -> {}", word, stemmer.stem_word(word))?;
    }
    writeln!(out, "\nShort words (2 letters or less):")?;
    for word in SHORT_WORDS {
        writeln!(out, "{:15} -> {}", word, stemmer.stem_word(word))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Demonstration completed.")
}

/// Print example library usage.
pub fn print_example<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Stemma - Example Code")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;
    write!(out, "{}", EXAMPLE_CODE)?;
    writeln!(out, "{}", "=".repeat(60))
}
