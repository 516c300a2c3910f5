//! Tier 4: Case handling, documents and files through the facade.

use crate::test_utils::stemmer;
use std::io::Write;
use stemma::{CaseMode, OutputFormat, Rendered, Stemmer, StemmerConfig, Variant};

#[test]
fn tier4_case_policy() {
    let lower = stemmer(Variant::Original, CaseMode::Lower);
    let preserve = stemmer(Variant::Original, CaseMode::Preserve);

    assert_eq!(lower.stem_word("RUNNING"), "run");
    assert_eq!(preserve.stem_word("RUNNING"), "RUN");
    assert_eq!(preserve.stem_word("Running"), "Run");
    assert_eq!(preserve.stem_word("HaPpY"), "HaPpI");
    assert_eq!(preserve.stem_word("FLIES"), "FLI");
}

#[test]
fn tier4_short_and_foreign_words() {
    let lower = Stemmer::default();
    assert_eq!(lower.stem_word("I"), "i");
    assert_eq!(lower.stem_word("AM"), "am");
    assert_eq!(lower.stem_word("naïve"), "naïve");
    assert_eq!(lower.stem_word("NAÏVE"), "naïve");
    assert_eq!(lower.stem_word("CAFÉS"), "cafés");

    let preserve = stemmer(Variant::Original, CaseMode::Preserve);
    assert_eq!(preserve.stem_word("I"), "I");
    assert_eq!(preserve.stem_word("Be"), "Be");
    assert_eq!(preserve.stem_word("CAFÉS"), "CAFÉS");
}

#[test]
fn tier4_document_reassembly() {
    let text = "The boys are running quickly through the fields. ice\n\
                cream. They were hoping to catch butterflies but can't!";
    let stemmed = Stemmer::default().stem_document(text);
    assert_eq!(
        stemmed,
        "the boi ar run quickli through the field. ic\n\
         cream. thei were hope to catch butterfli but can't!"
    );

    let separators = |s: &str| s.chars().filter(|c| !c.is_alphabetic()).collect::<String>();
    assert_eq!(separators(&stemmed), separators(text));
}

#[test]
fn tier4_document_clean_and_tokens() {
    let config = StemmerConfig::new()
        .clean_non_alphanumeric(true)
        .output(OutputFormat::Tokens);
    let stemmer = Stemmer::new(config);

    assert_eq!(
        stemmer.stem_document("user@email.com: (running) 123-4567"),
        "user email com run 123 4567"
    );
    assert_eq!(
        stemmer.render("Hopping, hopped; hops!"),
        Rendered::Tokens(vec!["hop".into(), "hop".into(), "hop".into()])
    );
}

#[test]
fn tier4_file_streaming() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Running\r\n\r\nponies, cats\n").unwrap();

    let preserve = stemmer(Variant::Revised, CaseMode::Preserve);
    let lines: Vec<String> = preserve
        .stem_file_lines(file.path())
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(lines, vec!["Run\r\n", "\r\n", "poni, cat\n"]);
}

#[test]
fn tier4_parallel_batches_match_sequential() {
    let stemmer = Stemmer::default();
    let words: Vec<String> = (0..stemma::PARALLEL_THRESHOLD * 4)
        .map(|i| ["relational", "hopping", "Caresses", "sky", "x"][i % 5].to_string())
        .collect();

    let batch = stemmer.stem_tokens(&words);
    let one_by_one: Vec<String> = words.iter().map(|w| stemmer.stem_word(w)).collect();
    assert_eq!(batch, one_by_one);
}

#[test]
fn tier4_shared_across_threads() {
    let stemmer = std::sync::Arc::new(Stemmer::with_variant(Variant::Revised));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = stemmer.clone();
            std::thread::spawn(move || s.stem_word("ties"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "tie");
    }
}
