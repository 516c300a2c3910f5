//! Porter stemmer
//!
//! Leaf first: [`classifier`] assigns consonant/vowel roles, [`measure`]
//! computes m and the shape queries, [`condition`] evaluates rule
//! predicates, [`rules`] holds the per-step tables and [`engine`] runs them.

pub mod classifier;
pub mod condition;
pub mod engine;
pub mod irregular;
pub mod measure;
pub mod rules;

pub use classifier::{role_at, roles, CharRole};
pub use condition::{evaluate, measure_at_least, Condition};
pub use engine::{
    apply_step, apply_steps, is_stemmable, stem, step1a, step1b, step1c, step2, step3, step4,
    step5a, step5b, MIN_STEMMABLE_LEN,
};
pub use measure::{contains_vowel, ends_with_cvc, ends_with_double_consonant, measure};
pub use rules::{apply_rules, step_rules, Rule, Step};
