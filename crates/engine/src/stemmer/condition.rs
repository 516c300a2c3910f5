//! Rule conditions
//!
//! A condition is a pure predicate over a candidate stem: the word with the
//! rule's suffix already removed and the replacement not yet appended. Both
//! rule variants share these predicates; only the tables differ.
//!
//! Conditions print in the notation of Porter's paper and the atomic ones
//! parse back from it:
//!
//! | Notation | Meaning |
//! |----------|---------|
//! | `*v*` | stem contains a vowel |
//! | `*d` | stem ends with a double consonant |
//! | `*o` | stem ends cvc, final consonant not w/x/y |
//! | `*c` | stem ends with a consonant |
//! | `*S`, `*L`, ... | stem ends with that letter |
//! | `m>N`, `m=N`, `m>=N` | measure comparisons |
//! | `len>N`, `len=N` | stem length comparisons |

use super::measure::{
    contains_vowel, ends_with_cvc, ends_with_double_consonant, ends_with_consonant, measure,
};
use std::fmt;
use std::str::FromStr;
use stemma_core::Error;

/// Predicate gating a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Always holds.
    Always,
    /// `*v*`
    ContainsVowel,
    /// `*d`
    EndsWithDoubleConsonant,
    /// `*o`
    EndsWithCvc,
    /// `*c`
    EndsWithConsonant,
    /// `*X`: the stem ends with this lowercase letter.
    EndsWith(u8),
    /// The stem ends with any of these lowercase letters.
    EndsWithAny(&'static [u8]),
    /// `m>N`
    MeasureAbove(usize),
    /// `m=N`
    MeasureEquals(usize),
    /// `len>N`
    LengthAbove(usize),
    /// `len=N`
    LengthEquals(usize),
    /// Negation.
    Not(&'static Condition),
    /// Conjunction; holds when every member holds.
    All(&'static [Condition]),
}

impl Condition {
    /// Evaluate against `stem`.
    #[inline]
    pub fn holds(&self, stem: &str) -> bool {
        evaluate(self, stem)
    }
}

/// Evaluate a condition against a candidate stem.
pub fn evaluate(condition: &Condition, stem: &str) -> bool {
    match *condition {
        Condition::Always => true,
        Condition::ContainsVowel => contains_vowel(stem),
        Condition::EndsWithDoubleConsonant => ends_with_double_consonant(stem),
        Condition::EndsWithCvc => ends_with_cvc(stem),
        Condition::EndsWithConsonant => ends_with_consonant(stem),
        Condition::EndsWith(letter) => stem.as_bytes().last() == Some(&letter),
        Condition::EndsWithAny(letters) => stem
            .as_bytes()
            .last()
            .map_or(false, |last| letters.contains(last)),
        Condition::MeasureAbove(k) => measure(stem) > k,
        Condition::MeasureEquals(k) => measure(stem) == k,
        Condition::LengthAbove(n) => stem.len() > n,
        Condition::LengthEquals(n) => stem.len() == n,
        Condition::Not(inner) => !evaluate(inner, stem),
        Condition::All(members) => members.iter().all(|c| evaluate(c, stem)),
    }
}

/// Does the stem have measure `k` or more?
pub fn measure_at_least(stem: &str, k: usize) -> bool {
    measure(stem) >= k
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("true"),
            Condition::ContainsVowel => f.write_str("*v*"),
            Condition::EndsWithDoubleConsonant => f.write_str("*d"),
            Condition::EndsWithCvc => f.write_str("*o"),
            Condition::EndsWithConsonant => f.write_str("*c"),
            Condition::EndsWith(letter) => write!(f, "*{}", letter.to_ascii_uppercase() as char),
            Condition::EndsWithAny(letters) => {
                f.write_str("(")?;
                for (i, letter) in letters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "*{}", letter.to_ascii_uppercase() as char)?;
                }
                f.write_str(")")
            }
            Condition::MeasureAbove(k) => write!(f, "m>{}", k),
            Condition::MeasureEquals(k) => write!(f, "m={}", k),
            Condition::LengthAbove(n) => write!(f, "len>{}", n),
            Condition::LengthEquals(n) => write!(f, "len={}", n),
            Condition::Not(inner) => write!(f, "not {}", inner),
            Condition::All(members) => {
                f.write_str("(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{}", member)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    /// Parse an atomic condition. Compound conditions only exist in the
    /// static rule tables.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || Error::InvalidCondition(s.to_string());

        match text {
            "true" => return Ok(Condition::Always),
            "*v*" => return Ok(Condition::ContainsVowel),
            "*d" => return Ok(Condition::EndsWithDoubleConsonant),
            "*o" => return Ok(Condition::EndsWithCvc),
            "*c" => return Ok(Condition::EndsWithConsonant),
            _ => {}
        }

        if let Some(letter) = text.strip_prefix('*') {
            return match letter.as_bytes() {
                [b] if b.is_ascii_alphabetic() => Ok(Condition::EndsWith(b.to_ascii_lowercase())),
                _ => Err(invalid()),
            };
        }

        let number = |digits: &str| digits.trim().parse::<usize>().map_err(|_| invalid());

        if let Some(rest) = text.strip_prefix("m>=") {
            return Ok(match number(rest)? {
                0 => Condition::Always,
                k => Condition::MeasureAbove(k - 1),
            });
        }
        if let Some(rest) = text.strip_prefix("m>") {
            return Ok(Condition::MeasureAbove(number(rest)?));
        }
        if let Some(rest) = text.strip_prefix("m=") {
            return Ok(Condition::MeasureEquals(number(rest)?));
        }
        if let Some(rest) = text.strip_prefix("len>") {
            return Ok(Condition::LengthAbove(number(rest)?));
        }
        if let Some(rest) = text.strip_prefix("len=") {
            return Ok(Condition::LengthEquals(number(rest)?));
        }

        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_predicates() {
        assert!(evaluate(&Condition::ContainsVowel, "plaster"));
        assert!(!evaluate(&Condition::ContainsVowel, "bl"));
        assert!(evaluate(&Condition::EndsWithDoubleConsonant, "hopp"));
        assert!(evaluate(&Condition::EndsWithCvc, "fil"));
        assert!(evaluate(&Condition::EndsWith(b's'), "adopts"));
        assert!(!evaluate(&Condition::EndsWith(b's'), "adopt"));
    }

    #[test]
    fn test_measure_conditions() {
        assert!(evaluate(&Condition::MeasureAbove(0), "agr"));
        assert!(!evaluate(&Condition::MeasureAbove(0), "f"));
        assert!(evaluate(&Condition::MeasureAbove(1), "adopt"));
        assert!(evaluate(&Condition::MeasureEquals(1), "ceas"));
        assert!(measure_at_least("private", 2));
        assert!(!measure_at_least("tree", 1));
    }

    #[test]
    fn test_compound_conditions() {
        const ION: Condition = Condition::All(&[
            Condition::MeasureAbove(1),
            Condition::EndsWithAny(b"st"),
        ]);
        assert!(ION.holds("adopt"));
        assert!(!ION.holds("opin")); // wrong final letter
        assert!(!ION.holds("cat")); // m too small

        const NOT_CVC: Condition = Condition::Not(&Condition::EndsWithCvc);
        assert!(NOT_CVC.holds("ceas"));
        assert!(!NOT_CVC.holds("hop"));
    }

    #[test]
    fn test_length_conditions() {
        assert!(Condition::LengthEquals(1).holds("t"));
        assert!(!Condition::LengthEquals(1).holds("fl"));
        assert!(Condition::LengthAbove(1).holds("cr"));
        assert!(!Condition::LengthAbove(1).holds("b"));
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("*v*".parse::<Condition>().unwrap(), Condition::ContainsVowel);
        assert_eq!("*d".parse::<Condition>().unwrap(), Condition::EndsWithDoubleConsonant);
        assert_eq!("*o".parse::<Condition>().unwrap(), Condition::EndsWithCvc);
        assert_eq!("*S".parse::<Condition>().unwrap(), Condition::EndsWith(b's'));
        assert_eq!("*l".parse::<Condition>().unwrap(), Condition::EndsWith(b'l'));
        assert_eq!("m>1".parse::<Condition>().unwrap(), Condition::MeasureAbove(1));
        assert_eq!("m=1".parse::<Condition>().unwrap(), Condition::MeasureEquals(1));
        assert_eq!("m>=2".parse::<Condition>().unwrap(), Condition::MeasureAbove(1));
        assert_eq!("m>=0".parse::<Condition>().unwrap(), Condition::Always);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "*", "*ss", "*1", "m>", "m>x", "vowel"] {
            assert!(
                matches!(bad.parse::<Condition>(), Err(Error::InvalidCondition(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_display_roundtrip_for_atoms() {
        let atoms = [
            Condition::Always,
            Condition::ContainsVowel,
            Condition::EndsWithDoubleConsonant,
            Condition::EndsWithCvc,
            Condition::EndsWithConsonant,
            Condition::EndsWith(b't'),
            Condition::MeasureAbove(0),
            Condition::MeasureEquals(1),
            Condition::LengthAbove(1),
            Condition::LengthEquals(1),
        ];
        for atom in atoms {
            assert_eq!(atom.to_string().parse::<Condition>().unwrap(), atom);
        }
    }

    #[test]
    fn test_display_compound() {
        let c = Condition::All(&[Condition::MeasureAbove(1), Condition::EndsWithAny(b"st")]);
        assert_eq!(c.to_string(), "(m>1 and (*S or *T))");
        assert_eq!(Condition::Not(&Condition::EndsWithCvc).to_string(), "not *o");
    }
}
