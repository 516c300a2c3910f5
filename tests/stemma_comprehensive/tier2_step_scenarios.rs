//! Tier 2: Individual steps and the fixed step order.

use stemma::{apply_steps, Step, Variant};

const O: Variant = Variant::Original;

fn through(step: Step) -> Vec<Step> {
    Step::ALL
        .iter()
        .copied()
        .take_while(|&s| s != step)
        .chain(std::iter::once(step))
        .collect()
}

fn at(word: &str, step: Step) -> String {
    apply_steps(word, O, &[step])
}

#[test]
fn tier2_step1b_literals() {
    assert_eq!(at("agreed", Step::Step1b), "agree");
    assert_eq!(at("feed", Step::Step1b), "feed");
    assert_eq!(at("fizzed", Step::Step1b), "fizz");
}

#[test]
fn tier2_step2_literals() {
    assert_eq!(at("relational", Step::Step2), "relate");
    assert_eq!(at("conditional", Step::Step2), "condition");
    assert_eq!(at("rational", Step::Step2), "rational");
    assert_eq!(at("hesitanci", Step::Step2), "hesitance");
}

#[test]
fn tier2_unchanged_before_step5() {
    for word in ["cease", "agree"] {
        assert_eq!(apply_steps(word, O, &through(Step::Step4)), word);
    }
}

#[test]
fn tier2_step5() {
    assert_eq!(at("probate", Step::Step5a), "probat");
    assert_eq!(at("rate", Step::Step5a), "rate");
    assert_eq!(at("controll", Step::Step5b), "control");
    assert_eq!(at("roll", Step::Step5b), "roll");
}

#[test]
fn tier2_full_order_is_all_steps() {
    assert_eq!(through(Step::Step5b), Step::ALL.to_vec());
    assert_eq!(stemma::stem("played", O), apply_steps("played", O, &Step::ALL));
}

#[test]
fn tier2_step1c_needs_step1b_first() {
    assert_eq!(apply_steps("played", O, &Step::ALL), "plai");

    let mut swapped = Step::ALL.to_vec();
    swapped.swap(1, 2);
    assert_eq!(apply_steps("played", O, &swapped), "play");
}

#[test]
fn tier2_step5a_needs_repair_first() {
    assert_eq!(apply_steps("conflated", O, &Step::ALL), "conflat");

    let mut reordered: Vec<Step> = Step::ALL.iter().copied().filter(|&s| s != Step::Step5a).collect();
    reordered.insert(1, Step::Step5a);
    assert_eq!(apply_steps("conflated", O, &reordered), "conflate");
}
