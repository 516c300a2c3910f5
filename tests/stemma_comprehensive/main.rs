//! Stemma Comprehensive Test Suite
//!
//! End-to-end checks of the public `stemma` API, grouped by tier.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Published word/stem vectors
//! - **Tier 2**: Individual steps and step ordering
//! - **Tier 3**: Original vs Revised divergence
//! - **Tier 4**: Case handling, documents and files through the facade
//! - **Tier 5**: Property tests
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test stemma_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Published vectors
mod tier1_paper_vectors;

// Tier 2: Steps and ordering
mod tier2_step_scenarios;

// Tier 3: Variant divergence
mod tier3_variant_divergence;

// Tier 4: Facade behaviour
mod tier4_case_and_documents;

// Tier 5: Properties
mod tier5_properties;
