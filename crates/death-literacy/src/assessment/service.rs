use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use super::domain::{AnswerSet, Demographics};
use super::engine::{AssessmentEngine, AssessmentReport};
use super::repository::{ResponseId, ResponseRecord, ResponseStore, StoreError};

/// Payload accepted from the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub demographics: Option<Demographics>,
}

/// A stored response together with its freshly computed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResponse {
    pub id: ResponseId,
    pub submitted_at: DateTime<Utc>,
    pub report: AssessmentReport,
}

/// Shared entry point for the respondent flow and admin regeneration. Both paths
/// score through the same engine.
pub struct AssessmentService<S> {
    store: Arc<S>,
    engine: Arc<AssessmentEngine>,
    sequence: AtomicU64,
}

impl<S> AssessmentService<S>
where
    S: ResponseStore + 'static,
{
    pub fn new(store: Arc<S>, engine: AssessmentEngine) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_response_id(&self) -> ResponseId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ResponseId(format!("resp-{id:06}"))
    }

    /// Score answers without storing them.
    pub fn score(&self, submission: &AssessmentSubmission) -> AssessmentReport {
        self.engine
            .evaluate(&submission.answers, submission.demographics.as_ref())
    }

    /// Record a completed questionnaire and return its report.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<ScoredResponse, AssessmentServiceError> {
        let record = ResponseRecord {
            id: self.next_response_id(),
            submitted_at: Utc::now(),
            answers: submission.answers,
            demographics: submission.demographics,
        };

        let stored = self.store.insert(record)?;
        info!(response_id = %stored.id, answers = stored.answers.len(), "assessment recorded");
        Ok(self.scored(stored))
    }

    /// Respondent-facing report, recomputed from the stored answers.
    pub fn report(&self, id: &ResponseId) -> Result<ScoredResponse, AssessmentServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(self.scored(record))
    }

    /// Admin-facing regeneration of every stored report.
    pub fn regenerate_all(&self) -> Result<Vec<ScoredResponse>, AssessmentServiceError> {
        let records = self.store.list()?;
        info!(responses = records.len(), "regenerating assessment reports");
        Ok(records
            .into_iter()
            .map(|record| self.scored(record))
            .collect())
    }

    fn scored(&self, record: ResponseRecord) -> ScoredResponse {
        let report = self
            .engine
            .evaluate(&record.answers, record.demographics.as_ref());
        ScoredResponse {
            id: record.id,
            submitted_at: record.submitted_at,
            report,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
