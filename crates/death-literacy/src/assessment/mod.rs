//! Death literacy scoring, benchmarking, and feedback.
//!
//! Answers flow through the category map into per-domain scores, are compared
//! against the benchmark table, and are turned into narrative feedback. Every step
//! is a pure function of the answers, the optional demographics, and the
//! [`ScoringTables`] the engine was built with.

pub mod comparison;
pub mod domain;
mod engine;
pub mod feedback;
pub mod import;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod social;
pub mod tables;

#[cfg(test)]
mod tests;

pub use comparison::{compare, Comparison, ComparisonSet, DomainComparison};
pub use domain::{AnswerSet, AnswerValue, Demographics, Domain, Tier};
pub use engine::{AssessmentEngine, AssessmentReport};
pub use feedback::{DomainInsight, FeedbackReport};
pub use import::{import_responses, import_responses_from_path, ImportError, ImportedResponse};
pub use repository::{ResponseId, ResponseRecord, ResponseStore, StoreError};
pub use router::assessment_router;
pub use scoring::{CategoryScores, DomainCoverage, OverallScore};
pub use service::{AssessmentService, AssessmentServiceError, AssessmentSubmission, ScoredResponse};
pub use social::SocialConnection;
pub use tables::{ScoringTables, TablesError, TierThresholds};
