use super::common::*;
use crate::assessment::comparison::classify;
use crate::assessment::domain::{AnswerSet, Tier};
use crate::assessment::social::social_score;
use crate::assessment::tables::ScoringTables;

fn social_answers(tables: &ScoringTables, values: [i64; 4]) -> AnswerSet {
    tables
        .social_questions
        .iter()
        .cloned()
        .zip(values)
        .collect()
}

#[test]
fn score_stays_on_native_scale() {
    let tables = tables();
    let result = social_score(&tables, &social_answers(&tables, [4, 4, 4, 4]));

    assert_close(result.score, 4.0);
    assert_eq!(result.answered, 4);
    assert_eq!(result.tier, Tier::Higher);
}

#[test]
fn six_tenths_above_benchmark_is_higher() {
    let tables = tables();
    // Mean 3.25 against the 2.65 benchmark.
    let result = social_score(&tables, &social_answers(&tables, [3, 3, 4, 3]));

    assert_close(result.difference, 0.6);
    assert_eq!(result.tier, Tier::Higher);
    // The same difference sits inside the wider domain band.
    assert_eq!(
        classify(result.difference, tables.thresholds.domain_margin),
        Tier::Similar
    );
}

#[test]
fn half_point_margin_is_inclusive() {
    let tables = midpoint_tables();

    let at_upper = social_score(&tables, &social_answers(&tables, [3, 3, 3, 3]));
    let above = social_score(&tables, &social_answers(&tables, [3, 3, 3, 4]));
    let at_lower = social_score(&tables, &social_answers(&tables, [2, 2, 2, 2]));
    let below = social_score(&tables, &social_answers(&tables, [2, 2, 2, 1]));

    assert_eq!(at_upper.tier, Tier::Similar);
    assert_eq!(above.tier, Tier::Higher);
    assert_eq!(at_lower.tier, Tier::Similar);
    assert_eq!(below.tier, Tier::Lower);
}

#[test]
fn social_margin_is_independent_of_domain_margin() {
    let mut tables = midpoint_tables();
    tables.thresholds.domain_margin = 5.0;

    let result = social_score(&tables, &social_answers(&tables, [3, 3, 3, 4]));

    assert_eq!(result.tier, Tier::Higher);
}

#[test]
fn unanswered_social_questions_score_zero() {
    let tables = tables();
    let result = social_score(&tables, &AnswerSet::new());

    assert_eq!(result.score, 0.0);
    assert_eq!(result.answered, 0);
    assert_eq!(result.benchmark, tables.benchmarks.social_connection);
}

#[test]
fn social_answers_do_not_move_domain_scores() {
    let engine = engine();
    let answers = social_answers(engine.tables(), [4, 4, 4, 4]);

    let report = engine.evaluate(&answers, None);

    assert_eq!(report.scores.overall, 0.0);
    assert_eq!(report.social_connection.tier, Tier::Higher);
}
