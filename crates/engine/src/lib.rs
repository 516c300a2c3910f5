//! Porter stemming engine for Stemma.
//!
//! This crate provides:
//! - [`stemmer`]: the suffix-stripping algorithm with its two rule variants
//! - [`text`]: case handling, cleaning and segmentation of running text
//! - [`Stemmer`]: the facade that ties both together for words, documents
//!   and files

#![warn(missing_docs)]

pub mod pipeline;
pub mod stemmer;
pub mod text;

pub use pipeline::{FileReport, Rendered, StemmedLines, Stemmer, PARALLEL_THRESHOLD};
pub use stemmer::{stem, Condition, Rule, Step};
