//! # Stemma
//!
//! Deterministic Porter stemming for English words, documents and files.
//!
//! ```
//! use stemma::{Stemmer, StemmerConfig, Variant};
//!
//! assert_eq!(stemma::stem("generalizations", Variant::Original), "gener");
//!
//! let stemmer = Stemmer::new(StemmerConfig::new().variant(Variant::Revised));
//! assert_eq!(stemmer.stem_word("ties"), "tie");
//! assert_eq!(stemmer.stem_document("Cats, running!"), "cat, run!");
//! ```
//!
//! [`stem`] is the bare algorithm: lowercase ASCII in, stem out, everything
//! else passed through. [`Stemmer`] adds case handling, the irregular-forms
//! table, document segmentation and file streaming.

#![warn(missing_docs)]

pub mod types;

pub use stemma_engine::stemmer::{apply_steps, measure};
pub use stemma_engine::{stem, Stemmer, PARALLEL_THRESHOLD};
pub use types::*;
