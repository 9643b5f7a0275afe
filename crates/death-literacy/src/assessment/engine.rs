use serde::{Deserialize, Serialize};
use tracing::debug;

use super::comparison::ComparisonSet;
use super::domain::{AnswerSet, Demographics, Domain};
use super::feedback::{domain_insights, synthesize, DomainInsight, FeedbackReport};
use super::scoring::{
    coverage, domain_score, overall_score, questions_for, DomainCoverage, OverallScore,
};
use super::social::{social_score, SocialConnection};
use super::tables::ScoringTables;

/// Stateless engine that applies one version of the scoring tables to answer sets.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    tables: ScoringTables,
}

impl AssessmentEngine {
    pub fn new(tables: ScoringTables) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(ScoringTables::standard())
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn questions_for(&self, domain_name: &str) -> &[String] {
        questions_for(&self.tables, domain_name)
    }

    /// Score for a domain given by name; unknown names score zero.
    pub fn domain_score(&self, answers: &AnswerSet, domain_name: &str) -> f64 {
        match Domain::from_key(domain_name) {
            Some(domain) => domain_score(&self.tables, answers, domain),
            None => 0.0,
        }
    }

    pub fn overall_score(&self, answers: &AnswerSet) -> OverallScore {
        overall_score(&self.tables, answers)
    }

    pub fn coverage(&self, answers: &AnswerSet) -> Vec<DomainCoverage> {
        coverage(&self.tables, answers)
    }

    pub fn compare(&self, scores: &OverallScore, coverage: &[DomainCoverage]) -> ComparisonSet {
        ComparisonSet::build(
            scores,
            coverage,
            &self.tables.benchmarks,
            self.tables.thresholds.domain_margin,
        )
    }

    pub fn social_score(&self, answers: &AnswerSet) -> SocialConnection {
        social_score(&self.tables, answers)
    }

    pub fn synthesize(
        &self,
        comparisons: &ComparisonSet,
        demographics: Option<&Demographics>,
    ) -> FeedbackReport {
        synthesize(&self.tables, comparisons, demographics)
    }

    /// Full report for one respondent. Recomputed from scratch on every call.
    pub fn evaluate(
        &self,
        answers: &AnswerSet,
        demographics: Option<&Demographics>,
    ) -> AssessmentReport {
        let scores = self.overall_score(answers);
        let coverage = coverage(&self.tables, answers);
        let comparisons = self.compare(&scores, &coverage);
        let social_connection = self.social_score(answers);
        let feedback = self.synthesize(&comparisons, demographics);

        debug!(
            tables = %self.tables.version,
            answers = answers.len(),
            overall = scores.overall,
            overall_tier = ?comparisons.overall.tier,
            recommendations = feedback.recommendations.len(),
            "assessment report computed"
        );

        AssessmentReport {
            tables_version: self.tables.version.clone(),
            coverage,
            domain_insights: domain_insights(&self.tables, &comparisons),
            scores,
            comparisons,
            social_connection,
            feedback,
        }
    }
}

/// Structured output handed to renderers, exporters, and the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub tables_version: String,
    pub scores: OverallScore,
    pub coverage: Vec<DomainCoverage>,
    pub comparisons: ComparisonSet,
    pub social_connection: SocialConnection,
    pub domain_insights: Vec<DomainInsight>,
    pub feedback: FeedbackReport,
}
