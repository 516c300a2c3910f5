//! Shared types for the Stemma workspace.
//!
//! This crate defines:
//! - `Variant`, `CaseMode`, `OutputFormat`: the knobs a stemming session is built from
//! - `StemmerConfig`: the serde/TOML configuration carrying those knobs
//! - `Error` / `Result`: the error taxonomy of the collaborators around the engine

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::StemmerConfig;
pub use error::{Error, Result};
pub use types::{CaseMode, OutputFormat, Variant};
