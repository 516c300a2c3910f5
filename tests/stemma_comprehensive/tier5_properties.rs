//! Tier 5: Property tests over generated lowercase words and documents.

use proptest::prelude::*;
use stemma::{CaseMode, Stemmer, StemmerConfig, Variant};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Original), Just(Variant::Revised)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_deterministic(word in "[a-z]{0,24}", v in variant()) {
        prop_assert_eq!(stemma::stem(&word, v), stemma::stem(&word, v));
    }

    #[test]
    fn prop_length_floor(word in "[a-z]{0,2}", v in variant()) {
        prop_assert_eq!(stemma::stem(&word, v), word);
    }

    #[test]
    fn prop_never_longer_never_empty(word in "[a-z]{3,24}", v in variant()) {
        let stem = stemma::stem(&word, v);
        prop_assert!(stem.len() <= word.len(), "{} -> {}", word, stem);
        prop_assert!(!stem.is_empty(), "{} -> empty", word);
        prop_assert!(stem.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn prop_variants_agree_without_y_or_ies(word in "[a-xz]{3,16}") {
        prop_assume!(!word.ends_with("ies"));
        prop_assert_eq!(
            stemma::stem(&word, Variant::Original),
            stemma::stem(&word, Variant::Revised)
        );
    }

    #[test]
    fn prop_case_mode_only_changes_case(word in "[a-zA-Z]{1,16}", v in variant()) {
        let lower = Stemmer::new(StemmerConfig::new().variant(v));
        let preserve = Stemmer::new(StemmerConfig::new().variant(v).case_mode(CaseMode::Preserve));
        prop_assert_eq!(
            preserve.stem_word(&word).to_ascii_lowercase(),
            lower.stem_word(&word)
        );
    }

    #[test]
    fn prop_lower_mode_output_is_lowercase(word in "\\p{L}{1,12}", v in variant()) {
        let lower = Stemmer::new(StemmerConfig::new().variant(v));
        let got = lower.stem_word(&word);
        prop_assert_eq!(got.to_lowercase(), got);
    }

    #[test]
    fn prop_document_keeps_separators(text in "[a-z ,.;!\n]{0,80}") {
        let stemmed = Stemmer::default().stem_document(&text);
        let separators = |s: &str| s.chars().filter(|c| !c.is_ascii_lowercase()).collect::<String>();
        prop_assert_eq!(separators(&stemmed), separators(&text));
    }

    #[test]
    fn prop_tokens_match_document_words(text in "[a-z ,.]{0,80}") {
        let stemmer = Stemmer::default();
        let tokens = stemmer.stem_document_tokens(&text);
        let from_doc: Vec<String> = stemmer
            .stem_document(&text)
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        prop_assert_eq!(tokens, from_doc);
    }
}
