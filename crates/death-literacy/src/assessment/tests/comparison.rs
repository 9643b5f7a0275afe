use super::common::*;
use crate::assessment::comparison::{classify, compare};
use crate::assessment::domain::{AnswerSet, Domain, Tier};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::tables::TierThresholds;

const MARGIN: f64 = TierThresholds::DEFAULT_DOMAIN_MARGIN;

#[test]
fn score_equal_to_benchmark_is_similar() {
    let comparison = compare(5.5, 5.5, MARGIN);
    assert_eq!(comparison.tier, Tier::Similar);
    assert_eq!(comparison.difference, 0.0);
}

#[test]
fn margin_boundary_belongs_to_similar() {
    let benchmark = 5.5;

    assert_eq!(compare(benchmark + 1.0, benchmark, MARGIN).tier, Tier::Similar);
    assert_eq!(compare(benchmark - 1.0, benchmark, MARGIN).tier, Tier::Similar);
    assert_eq!(compare(benchmark + 1.01, benchmark, MARGIN).tier, Tier::Higher);
    assert_eq!(compare(benchmark - 1.01, benchmark, MARGIN).tier, Tier::Lower);
}

#[test]
fn comparison_reports_signed_difference() {
    let comparison = compare(3.0, 4.5, MARGIN);
    assert_eq!(comparison.user_score, 3.0);
    assert_eq!(comparison.benchmark, 4.5);
    assert_close(comparison.difference, -1.5);
    assert_eq!(comparison.tier, Tier::Lower);
}

#[test]
fn margin_is_a_parameter() {
    assert_eq!(classify(0.5, 0.25), Tier::Higher);
    assert_eq!(classify(0.5, 0.5), Tier::Similar);
    assert_eq!(classify(-0.3, 0.25), Tier::Lower);
    assert_eq!(classify(0.0, 0.0), Tier::Similar);
}

#[test]
fn each_domain_uses_its_own_benchmark() {
    let engine = engine();
    let tables = engine.tables();
    let answers = all_domain_answers(tables, 3);

    let scores = engine.overall_score(&answers);
    let comparisons = engine.compare(&scores, &engine.coverage(&answers));

    let tier = |domain| comparisons.domain(domain).expect("domain compared").tier;
    // Every domain scores 5.0; only experience (benchmark 6.2) falls outside the band.
    assert_eq!(tier(Domain::Skills), Tier::Similar);
    assert_eq!(tier(Domain::Experience), Tier::Lower);
    assert_eq!(tier(Domain::Knowledge), Tier::Similar);
    assert_eq!(tier(Domain::Community), Tier::Similar);
    assert_eq!(comparisons.overall.tier, Tier::Similar);
    assert_eq!(comparisons.overall.benchmark, tables.benchmarks.overall);
    assert_eq!(
        comparisons
            .domain(Domain::Community)
            .expect("community compared")
            .benchmark,
        4.5
    );
}

#[test]
fn domain_margin_comes_from_the_tables() {
    let mut tables = tables();
    tables.thresholds.domain_margin = 0.1;
    let engine = AssessmentEngine::new(tables.clone());
    let answers = all_domain_answers(&tables, 3);

    let scores = engine.overall_score(&answers);
    let comparisons = engine.compare(&scores, &engine.coverage(&answers));

    assert_eq!(
        comparisons.domain(Domain::Skills).expect("skills").tier,
        Tier::Lower
    );
    assert_eq!(
        comparisons.domain(Domain::Community).expect("community").tier,
        Tier::Higher
    );
}

#[test]
fn unanswered_domains_are_compared_on_the_zero_floor() {
    let engine = engine();
    let answers = domain_answers(engine.tables(), Domain::Knowledge, 4);

    let scores = engine.overall_score(&answers);
    let comparisons = engine.compare(&scores, &engine.coverage(&answers));

    assert_eq!(comparisons.domains.len(), 4);
    assert_eq!(
        comparisons.domain(Domain::Skills).expect("skills").tier,
        Tier::Lower
    );
    assert_eq!(comparisons.domains[0].answered, 0);
    assert_eq!(comparisons.domains[2].answered, 6);
    assert!(comparisons.any_answered());

    let lower: Vec<Domain> = comparisons.domains_in(Tier::Lower).collect();
    assert_eq!(
        lower,
        vec![Domain::Skills, Domain::Experience, Domain::Community]
    );
}

#[test]
fn empty_answers_have_no_evidence() {
    let engine = engine();
    let answers = AnswerSet::new();

    let scores = engine.overall_score(&answers);
    let comparisons = engine.compare(&scores, &engine.coverage(&answers));

    assert!(!comparisons.any_answered());
    assert_eq!(comparisons.domains_in(Tier::Lower).count(), 4);
}
