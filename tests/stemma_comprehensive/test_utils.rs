//! Shared helpers for the comprehensive suite.

use stemma::{CaseMode, Stemmer, StemmerConfig, Variant};

/// Bare algorithm, Original rules.
pub fn original(word: &str) -> String {
    stemma::stem(word, Variant::Original)
}

/// Bare algorithm, Revised rules.
pub fn revised(word: &str) -> String {
    stemma::stem(word, Variant::Revised)
}

/// Facade with the given variant and case mode, irregular forms on.
pub fn stemmer(variant: Variant, case_mode: CaseMode) -> Stemmer {
    Stemmer::new(StemmerConfig::new().variant(variant).case_mode(case_mode))
}

/// Assert every `(input, expected)` pair, reporting all failures at once.
pub fn assert_pairs<F>(cases: &[(&str, &str)], f: F)
where
    F: Fn(&str) -> String,
{
    let failures: Vec<String> = cases
        .iter()
        .filter_map(|&(input, expected)| {
            let got = f(input);
            (got != expected).then(|| format!("{:?} => {:?} (expected {:?})", input, got, expected))
        })
        .collect();
    assert!(
        failures.is_empty(),
        "{} failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
