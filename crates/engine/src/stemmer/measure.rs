//! Measure and the derived shape queries.
//!
//! Any word can be written `[C](VC){m}[V]`, where `C` is a run of
//! consonants and `V` a run of vowels. `m` is the measure:
//!
//! - m=0: `tr`, `ee`, `tree`, `y`, `by`
//! - m=1: `trouble`, `oats`, `trees`, `ivy`
//! - m=2: `troubles`, `private`, `oaten`, `orrery`
//!
//! All functions here take lowercase ASCII letters.

use super::classifier::{roles, CharRole};

/// Compute the measure `m` of a word.
///
/// Runs are collapsed left to right and a leading consonant run is
/// dropped; every remaining vowel run that is followed by a consonant run
/// completes one `VC` pair. Each completed pair is exactly one
/// vowel-to-consonant transition in the role sequence.
pub fn measure(word: &str) -> usize {
    measure_roles(&roles(word.as_bytes()))
}

pub(crate) fn measure_roles(roles: &[CharRole]) -> usize {
    roles
        .windows(2)
        .filter(|pair| pair[0].is_vowel() && pair[1].is_consonant())
        .count()
}

/// `*v*`: does the stem contain a vowel?
pub fn contains_vowel(stem: &str) -> bool {
    roles(stem.as_bytes()).iter().any(|r| r.is_vowel())
}

/// `*d`: does the word end with two identical consonant letters?
pub fn ends_with_double_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    if len < 2 || b[len - 1] != b[len - 2] {
        return false;
    }
    roles(b)[len - 1].is_consonant()
}

/// `*o`: does the word end consonant-vowel-consonant, with the final
/// consonant not `w`, `x` or `y`?
pub fn ends_with_cvc(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    if len < 3 || matches!(b[len - 1], b'w' | b'x' | b'y') {
        return false;
    }
    let r = roles(b);
    r[len - 3].is_consonant() && r[len - 2].is_vowel() && r[len - 1].is_consonant()
}

/// Does the word end with a consonant?
pub fn ends_with_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    !b.is_empty() && roles(b)[b.len() - 1].is_consonant()
}
