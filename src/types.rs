//! Public types for the Stemma API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Configuration
// ============================================================================

pub use stemma_core::{CaseMode, OutputFormat, StemmerConfig, Variant};

// ============================================================================
// Errors
// ============================================================================

pub use stemma_core::{Error, Result};

// ============================================================================
// Results of stemming documents and files
// ============================================================================

pub use stemma_engine::{FileReport, Rendered, StemmedLines};

// ============================================================================
// Rule machinery, for callers that inspect or reorder steps
// ============================================================================

pub use stemma_engine::stemmer::{CharRole, Condition, Rule, Step};
