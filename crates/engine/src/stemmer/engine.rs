//! The stemming pipeline
//!
//! Implements Porter's suffix-stripping algorithm as described in:
//! Porter, M.F. "An algorithm for suffix stripping." Program 14.3 (1980): 130-137.
//!
//! The core operates on lowercase ASCII letters only. Anything else, and any
//! word of two letters or fewer, is returned unchanged.

use super::measure::{ends_with_cvc, ends_with_double_consonant, measure};
use super::rules::{apply_rules, step_rules, Step, STEP1B_REPAIR};
use stemma_core::Variant;
use tracing::trace;

/// Words shorter than this are never stemmed.
pub const MIN_STEMMABLE_LEN: usize = 3;

/// Stem a word with the given rule variant.
///
/// # Examples
///
/// ```
/// use stemma_core::Variant;
/// use stemma_engine::stemmer::stem;
///
/// assert_eq!(stem("running", Variant::Original), "run");
/// assert_eq!(stem("caresses", Variant::Original), "caress");
/// assert_eq!(stem("generalization", Variant::Original), "gener");
/// ```
pub fn stem(word: &str, variant: Variant) -> String {
    if !is_stemmable(word) {
        return word.to_string();
    }
    apply_steps(word, variant, &Step::ALL)
}

/// Would [`stem`] run the rules on this word?
pub fn is_stemmable(word: &str) -> bool {
    word.len() >= MIN_STEMMABLE_LEN && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Run `steps` in the given order.
///
/// [`stem`] uses [`Step::ALL`]; other orders exist for experiments and
/// tests. No length floor is applied here, but the input must still be
/// lowercase ASCII letters.
pub fn apply_steps(word: &str, variant: Variant, steps: &[Step]) -> String {
    steps
        .iter()
        .fold(word.to_string(), |w, &step| apply_step(&w, step, variant))
}

/// Run a single step.
pub fn apply_step(word: &str, step: Step, variant: Variant) -> String {
    let Some((out, rule)) = apply_rules(word, step_rules(step, variant)) else {
        return word.to_string();
    };
    trace!(target: "stemma::engine", %step, %rule, from = word, to = %out, "rule fired");

    if rule.repair {
        let repaired = repair_step1b(&out);
        if repaired != out {
            trace!(target: "stemma::engine", from = %out, to = %repaired, "step 1b repair");
        }
        return repaired;
    }
    out
}

/// Fix-up after Step 1b stripped `-ed` or `-ing`.
///
/// `at`, `bl`, `iz` gain an `e`; a double consonant other than `l`, `s`,
/// `z` is undoubled; an m=1 cvc stem gains an `e`.
fn repair_step1b(word: &str) -> String {
    if let Some((out, _)) = apply_rules(word, STEP1B_REPAIR) {
        return out;
    }
    if ends_with_double_consonant(word) && !word.ends_with(['l', 's', 'z']) {
        return word[..word.len() - 1].to_string();
    }
    if measure(word) == 1 && ends_with_cvc(word) {
        let mut out = String::with_capacity(word.len() + 1);
        out.push_str(word);
        out.push('e');
        return out;
    }
    word.to_string()
}

/// Step 1a: plurals.
pub fn step1a(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step1a, variant)
}

/// Step 1b: `-eed`, `-ed`, `-ing`, including the repair pass.
pub fn step1b(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step1b, variant)
}

/// Step 1c: terminal `y`.
pub fn step1c(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step1c, variant)
}

/// Step 2
pub fn step2(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step2, variant)
}

/// Step 3
pub fn step3(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step3, variant)
}

/// Step 4
pub fn step4(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step4, variant)
}

/// Step 5a: final `e`.
pub fn step5a(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step5a, variant)
}

/// Step 5b: `ll` to `l`.
pub fn step5b(word: &str, variant: Variant) -> String {
    apply_step(word, Step::Step5b, variant)
}
