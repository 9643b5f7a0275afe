use serde::{Deserialize, Serialize};

use super::comparison::classify;
use super::domain::{AnswerSet, Tier};
use super::scoring::tally;
use super::tables::ScoringTables;

/// Social connection result. The score stays on the native 1-4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialConnection {
    pub score: f64,
    pub benchmark: f64,
    pub difference: f64,
    pub tier: Tier,
    pub answered: usize,
}

pub fn social_score(tables: &ScoringTables, answers: &AnswerSet) -> SocialConnection {
    let tally = tally(answers, &tables.social_questions);
    let score = tally.mean().unwrap_or(0.0);
    let benchmark = tables.benchmarks.social_connection;
    let difference = score - benchmark;

    SocialConnection {
        score,
        benchmark,
        difference,
        tier: classify(difference, tables.thresholds.social_margin),
        answered: tally.answered,
    }
}
