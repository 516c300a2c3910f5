//! Declarative rule tables
//!
//! Each step is a slice of [`Rule`]s. The engine walks a slice in order:
//! the first rule whose suffix matches selects that suffix, and among the
//! rules sharing it the first whose condition holds fires. If none holds
//! the step leaves the word alone; a shorter suffix is never tried after a
//! longer one matched.
//!
//! The Original tables are Porter's algorithm as distributed in his
//! reference implementation (with `bli -> ble` and `logi -> log` in Step 2).
//! The Revised tables differ in Step 1a (`ies -> ie` for one-letter stems)
//! and Step 1c (`y -> i` only after a consonant, stem longer than one).

use super::condition::Condition;
use std::fmt;
use stemma_core::Variant;

/// One suffix-replacement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Suffix that must end the word.
    pub suffix: &'static str,
    /// Text appended to the stem when the rule fires.
    pub replacement: &'static str,
    /// Predicate evaluated on the stem (word minus suffix).
    pub condition: Condition,
    /// Run the Step 1b repair pass after this rule fires.
    pub repair: bool,
}

impl Rule {
    /// A rule without the repair flag.
    pub const fn new(
        suffix: &'static str,
        replacement: &'static str,
        condition: Condition,
    ) -> Self {
        Self {
            suffix,
            replacement,
            condition,
            repair: false,
        }
    }

    /// A Step 1b rule that triggers the repair pass.
    pub const fn with_repair(
        suffix: &'static str,
        replacement: &'static str,
        condition: Condition,
    ) -> Self {
        Self {
            suffix,
            replacement,
            condition,
            repair: true,
        }
    }

    /// Does `word` end with this rule's suffix?
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix)
    }

    /// The stem left by removing the suffix. Caller checks `matches` first.
    #[inline]
    pub fn stem_of<'a>(&self, word: &'a str) -> &'a str {
        &word[..word.len() - self.suffix.len()]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.condition {
            Condition::Always => {}
            // Already parenthesised.
            Condition::All(_) | Condition::EndsWithAny(_) => write!(f, "{} ", self.condition)?,
            ref other => write!(f, "({}) ", other)?,
        }
        let suffix = if self.suffix.is_empty() { "-" } else { self.suffix };
        let replacement = if self.replacement.is_empty() {
            "-"
        } else {
            self.replacement
        };
        write!(f, "{} -> {}", suffix, replacement)
    }
}

/// The eight steps, in the order the engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Plurals.
    Step1a,
    /// Past tense and gerunds, with the repair pass.
    Step1b,
    /// Terminal `y`.
    Step1c,
    /// Double suffixes to single ones.
    Step2,
    /// `-ic-`, `-full`, `-ness` and friends.
    Step3,
    /// Suffix removal at m>1.
    Step4,
    /// Final `e`.
    Step5a,
    /// Final `ll`.
    Step5b,
}

impl Step {
    /// Every step in the fixed order.
    pub const ALL: [Step; 8] = [
        Step::Step1a,
        Step::Step1b,
        Step::Step1c,
        Step::Step2,
        Step::Step3,
        Step::Step4,
        Step::Step5a,
        Step::Step5b,
    ];

    /// Short name, e.g. `"1a"`.
    pub fn name(self) -> &'static str {
        match self {
            Step::Step1a => "1a",
            Step::Step1b => "1b",
            Step::Step1c => "1c",
            Step::Step2 => "2",
            Step::Step3 => "3",
            Step::Step4 => "4",
            Step::Step5a => "5a",
            Step::Step5b => "5b",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.name())
    }
}

use Condition::*;

const M0: Condition = MeasureAbove(0);
const M1: Condition = MeasureAbove(1);

/// Step 1a, Original.
pub static STEP1A_ORIGINAL: &[Rule] = &[
    Rule::new("sses", "ss", Always),
    Rule::new("ies", "i", Always),
    Rule::new("ss", "ss", Always),
    Rule::new("s", "", Always),
];

/// Step 1a, Revised: four-letter `-ies` words keep `ie`.
pub static STEP1A_REVISED: &[Rule] = &[
    Rule::new("sses", "ss", Always),
    Rule::new("ies", "ie", LengthEquals(1)),
    Rule::new("ies", "i", Always),
    Rule::new("ss", "ss", Always),
    Rule::new("s", "", Always),
];

/// Step 1b. `eed` shadows `ed` even when its condition fails.
pub static STEP1B: &[Rule] = &[
    Rule::new("eed", "ee", M0),
    Rule::with_repair("ed", "", ContainsVowel),
    Rule::with_repair("ing", "", ContainsVowel),
];

/// Step 1b repair, first part. Applied unconditionally after `ed`/`ing`
/// fired; the doubling and `*o` cases follow in code.
pub static STEP1B_REPAIR: &[Rule] = &[
    Rule::new("at", "ate", Always),
    Rule::new("bl", "ble", Always),
    Rule::new("iz", "ize", Always),
];

/// Step 1c, Original.
pub static STEP1C_ORIGINAL: &[Rule] = &[Rule::new("y", "i", ContainsVowel)];

/// Step 1c, Revised.
pub static STEP1C_REVISED: &[Rule] = &[Rule::new(
    "y",
    "i",
    All(&[LengthAbove(1), EndsWithConsonant]),
)];

/// Step 2.
pub static STEP2: &[Rule] = &[
    Rule::new("ational", "ate", M0),
    Rule::new("tional", "tion", M0),
    Rule::new("enci", "ence", M0),
    Rule::new("anci", "ance", M0),
    Rule::new("izer", "ize", M0),
    Rule::new("bli", "ble", M0),
    Rule::new("alli", "al", M0),
    Rule::new("entli", "ent", M0),
    Rule::new("eli", "e", M0),
    Rule::new("ousli", "ous", M0),
    Rule::new("ization", "ize", M0),
    Rule::new("ation", "ate", M0),
    Rule::new("ator", "ate", M0),
    Rule::new("alism", "al", M0),
    Rule::new("iveness", "ive", M0),
    Rule::new("fulness", "ful", M0),
    Rule::new("ousness", "ous", M0),
    Rule::new("aliti", "al", M0),
    Rule::new("iviti", "ive", M0),
    Rule::new("biliti", "ble", M0),
    Rule::new("logi", "log", M0),
];

/// Step 3.
pub static STEP3: &[Rule] = &[
    Rule::new("icate", "ic", M0),
    Rule::new("ative", "", M0),
    Rule::new("alize", "al", M0),
    Rule::new("iciti", "ic", M0),
    Rule::new("ical", "ic", M0),
    Rule::new("ful", "", M0),
    Rule::new("ness", "", M0),
];

/// Step 4.
pub static STEP4: &[Rule] = &[
    Rule::new("al", "", M1),
    Rule::new("ance", "", M1),
    Rule::new("ence", "", M1),
    Rule::new("er", "", M1),
    Rule::new("ic", "", M1),
    Rule::new("able", "", M1),
    Rule::new("ible", "", M1),
    Rule::new("ant", "", M1),
    Rule::new("ement", "", M1),
    Rule::new("ment", "", M1),
    Rule::new("ent", "", M1),
    Rule::new("ion", "", All(&[M1, EndsWithAny(b"st")])),
    Rule::new("ou", "", M1),
    Rule::new("ism", "", M1),
    Rule::new("ate", "", M1),
    Rule::new("iti", "", M1),
    Rule::new("ous", "", M1),
    Rule::new("ive", "", M1),
    Rule::new("ize", "", M1),
];

/// Step 5a.
pub static STEP5A: &[Rule] = &[
    Rule::new("e", "", M1),
    Rule::new("e", "", All(&[MeasureEquals(1), Not(&EndsWithCvc)])),
];

/// Step 5b. The stem here still ends in the first `l` of `ll`.
pub static STEP5B: &[Rule] = &[Rule::new("l", "", All(&[M1, EndsWith(b'l')]))];

/// Rule table for `step` under `variant`.
pub fn step_rules(step: Step, variant: Variant) -> &'static [Rule] {
    match (step, variant) {
        (Step::Step1a, Variant::Original) => STEP1A_ORIGINAL,
        (Step::Step1a, Variant::Revised) => STEP1A_REVISED,
        (Step::Step1b, _) => STEP1B,
        (Step::Step1c, Variant::Original) => STEP1C_ORIGINAL,
        (Step::Step1c, Variant::Revised) => STEP1C_REVISED,
        (Step::Step2, _) => STEP2,
        (Step::Step3, _) => STEP3,
        (Step::Step4, _) => STEP4,
        (Step::Step5a, _) => STEP5A,
        (Step::Step5b, _) => STEP5B,
    }
}

/// Apply one table to `word`.
///
/// Returns the rewritten word and the rule that fired, or `None` when no
/// rule fired (no suffix matched, or the selected suffix's conditions all
/// failed).
pub fn apply_rules(word: &str, rules: &'static [Rule]) -> Option<(String, &'static Rule)> {
    let selected = rules.iter().find(|r| r.matches(word))?.suffix;
    rules
        .iter()
        .filter(|r| r.suffix == selected)
        .find(|r| r.condition.holds(r.stem_of(word)))
        .map(|rule| {
            let stem = rule.stem_of(word);
            let mut out = String::with_capacity(stem.len() + rule.replacement.len());
            out.push_str(stem);
            out.push_str(rule.replacement);
            (out, rule)
        })
}
