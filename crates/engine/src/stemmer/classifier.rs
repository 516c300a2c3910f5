//! Consonant/vowel classification
//!
//! `a`, `e`, `i`, `o`, `u` are vowels. `y` is a consonant at the start of a
//! word or after a vowel, and a vowel after a consonant. Every other letter
//! is a consonant.
//!
//! The role of position `i` depends only on the role of position `i - 1`,
//! so a whole word is classified in one left-to-right pass.

use smallvec::SmallVec;

/// Role sequence of a word. Words up to 24 letters stay on the stack.
pub type Roles = SmallVec<[CharRole; 24]>;

/// Role of a letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharRole {
    /// Consonant
    Consonant,
    /// Vowel
    Vowel,
}

impl CharRole {
    /// Is this a vowel?
    #[inline]
    pub fn is_vowel(self) -> bool {
        self == CharRole::Vowel
    }

    /// Is this a consonant?
    #[inline]
    pub fn is_consonant(self) -> bool {
        self == CharRole::Consonant
    }
}

#[inline]
fn classify(b: u8, prev: Option<CharRole>) -> CharRole {
    debug_assert!(b.is_ascii_lowercase(), "non-letter byte {:#04x}", b);
    match b {
        b'a' | b'e' | b'i' | b'o' | b'u' => CharRole::Vowel,
        b'y' => match prev {
            Some(CharRole::Consonant) => CharRole::Vowel,
            _ => CharRole::Consonant,
        },
        _ => CharRole::Consonant,
    }
}

/// Classify every position of `word`.
///
/// `word` must be lowercase ASCII letters.
pub fn roles(word: &[u8]) -> Roles {
    let mut out = Roles::with_capacity(word.len());
    let mut prev = None;
    for &b in word {
        let role = classify(b, prev);
        out.push(role);
        prev = Some(role);
    }
    out
}

/// Role of the letter at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn role_at(word: &[u8], index: usize) -> CharRole {
    let mut role = classify(word[0], None);
    for &b in &word[1..=index] {
        role = classify(b, Some(role));
    }
    role
}
