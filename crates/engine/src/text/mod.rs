//! Text handling around the stemmer: casing, cleaning and segmentation.

pub mod case;
pub mod clean;
pub mod tokenizer;

pub use case::{apply_case_mode, apply_case_pattern};
pub use clean::clean_non_alphanumeric;
pub use tokenizer::{rewrite_words, segments, words, Segment};
