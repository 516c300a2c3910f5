//! Whole-word overrides consulted before the rules.
//!
//! Some words come out of the algorithm badly (`skies -> ski`,
//! `dying -> dy`). The [`Stemmer`](crate::Stemmer) looks them up here
//! first. The free function [`stem`](super::stem) never does.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use stemma_core::Variant;

const SHARED: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("news", "news"),
    ("innings", "inning"),
    ("outing", "outing"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const REVISED_ONLY: &[(&str, &str)] = &[
    ("dies", "die"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
];

static ORIGINAL: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHARED.iter().copied().collect());

static REVISED: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SHARED.iter().chain(REVISED_ONLY).copied().collect());

fn table(variant: Variant) -> &'static HashMap<&'static str, &'static str> {
    match variant {
        Variant::Original => &ORIGINAL,
        Variant::Revised => &REVISED,
    }
}

/// Irregular stem for a lowercase word, if it has one.
pub fn lookup(word: &str, variant: Variant) -> Option<&'static str> {
    table(variant).get(word).copied()
}

/// Number of entries for `variant`.
pub fn len(variant: Variant) -> usize {
    table(variant).len()
}
