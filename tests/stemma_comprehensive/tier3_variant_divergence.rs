//! Tier 3: Where Original and Revised part ways, and where they must not.

use crate::test_utils::{original, revised, stemmer};
use stemma::{CaseMode, Variant};

#[test]
fn tier3_four_letter_ies() {
    // Step 1a itself diverges, not only the irregular table.
    assert_eq!(original("ties"), "ti");
    assert_eq!(revised("ties"), "tie");
    assert_eq!(original("dies"), "di");
    assert_eq!(revised("dies"), "die");
    // Longer -ies words agree.
    assert_eq!(original("ponies"), revised("ponies"));
}

#[test]
fn tier3_terminal_y() {
    assert_eq!(original("cry"), "cry");
    assert_eq!(revised("cry"), "cri");
    assert_eq!(original("say"), "sai");
    assert_eq!(revised("say"), "say");
    assert_eq!(original("by"), "by");
    assert_eq!(revised("by"), "by");
}

#[test]
fn tier3_irregular_tables() {
    let o = stemmer(Variant::Original, CaseMode::Lower);
    let r = stemmer(Variant::Revised, CaseMode::Lower);

    for (word, both) in [("skies", "sky"), ("news", "news"), ("innings", "inning")] {
        assert_eq!(o.stem_word(word), both);
        assert_eq!(r.stem_word(word), both);
    }
    assert_eq!(o.stem_word("dying"), "dy");
    assert_eq!(r.stem_word("dying"), "die");
    assert_eq!(o.stem_word("lying"), "ly");
    assert_eq!(r.stem_word("lying"), "lie");
}

#[test]
fn tier3_variants_agree_on_rules_they_share() {
    for word in [
        "caresses",
        "motoring",
        "relational",
        "triplicate",
        "adjustment",
        "controller",
        "generalizations",
    ] {
        assert_eq!(original(word), revised(word), "{}", word);
    }
}
