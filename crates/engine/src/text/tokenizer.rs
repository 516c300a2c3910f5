//! Document segmentation
//!
//! Text is split on Unicode word boundaries and every piece is labelled a
//! word or not. A word is a maximal run of alphabetic characters bounded by
//! non-word characters on both sides, so `can't` yields `can` and `t`, while
//! `test123` and `snake_case` are not words at all. Concatenating every
//! segment reproduces the input exactly.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// A slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Run of alphabetic characters.
    Word(&'a str),
    /// Anything else: whitespace, punctuation, digits, mixed tokens.
    Other(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying text.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Word(s) | Segment::Other(s) => s,
        }
    }

    /// Is this a word?
    pub fn is_word(&self) -> bool {
        matches!(self, Segment::Word(_))
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Split a boundary chunk that is not wholly alphabetic into alternating
/// runs of `\w` characters and everything else.
fn refine(chunk: &str) -> SmallVec<[Segment<'_>; 4]> {
    let mut out = SmallVec::new();
    let mut start = 0;
    let mut in_run = false;

    for (i, c) in chunk.char_indices() {
        if is_word_char(c) {
            if !in_run {
                if start < i {
                    out.push(Segment::Other(&chunk[start..i]));
                }
                start = i;
                in_run = true;
            }
        } else if in_run {
            out.push(classify_run(&chunk[start..i]));
            start = i;
            in_run = false;
        }
    }
    if start < chunk.len() {
        let tail = &chunk[start..];
        out.push(if in_run {
            classify_run(tail)
        } else {
            Segment::Other(tail)
        });
    }
    out
}

fn classify_run(run: &str) -> Segment<'_> {
    if is_word(run) {
        Segment::Word(run)
    } else {
        Segment::Other(run)
    }
}

/// Segment `text`, preserving every byte.
pub fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    text.split_word_bounds().flat_map(|chunk| {
        if is_word(chunk) {
            let mut one = SmallVec::<[Segment<'_>; 4]>::new();
            one.push(Segment::Word(chunk));
            one
        } else {
            refine(chunk)
        }
    })
}

/// The words of `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    segments(text).filter_map(|s| match s {
        Segment::Word(w) => Some(w),
        Segment::Other(_) => None,
    })
}

/// Replace every word with `f(word)` and copy everything else verbatim.
pub fn rewrite_words<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Word(w) => out.push_str(&f(w)),
            Segment::Other(s) => out.push_str(s),
        }
    }
    out
}
