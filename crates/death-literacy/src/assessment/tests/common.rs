use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerSet, Domain};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::repository::{ResponseId, ResponseRecord, ResponseStore, StoreError};
use crate::assessment::service::AssessmentService;
use crate::assessment::tables::ScoringTables;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn tables() -> ScoringTables {
    ScoringTables::standard()
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard()
}

/// Standard tables with every benchmark moved to 5.0, the score produced by
/// answering 3 on every 1-5 question.
pub(super) fn midpoint_tables() -> ScoringTables {
    let mut tables = ScoringTables::standard();
    tables.benchmarks.overall = 5.0;
    tables.benchmarks.domains = Domain::ordered()
        .into_iter()
        .map(|domain| (domain, 5.0))
        .collect::<BTreeMap<_, _>>();
    tables.benchmarks.social_connection = 2.5;
    tables
}

/// Every question of `domain` answered with `value`.
pub(super) fn domain_answers(tables: &ScoringTables, domain: Domain, value: i64) -> AnswerSet {
    tables
        .questions(domain)
        .iter()
        .map(|question| (question.clone(), value))
        .collect()
}

/// Every domain question answered with `value`.
pub(super) fn all_domain_answers(tables: &ScoringTables, value: i64) -> AnswerSet {
    Domain::ordered()
        .into_iter()
        .flat_map(|domain| tables.questions(domain).to_vec())
        .map(|question| (question, value))
        .collect()
}

pub(super) fn merge(mut base: AnswerSet, extra: &AnswerSet) -> AnswerSet {
    for (question, value) in extra.iter() {
        base.insert(question.clone(), value.clone());
    }
    base
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<ResponseId, ResponseRecord>>>,
}

impl ResponseStore for MemoryStore {
    fn insert(&self, record: ResponseRecord) -> Result<ResponseRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(records)
    }
}

pub(super) struct ConflictStore;

impl ResponseStore for ConflictStore {
    fn insert(&self, _record: ResponseRecord) -> Result<ResponseRecord, StoreError> {
        Err(StoreError::Conflict)
    }

    fn fetch(&self, _id: &ResponseId) -> Result<Option<ResponseRecord>, StoreError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, StoreError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableStore;

impl ResponseStore for UnavailableStore {
    fn insert(&self, _record: ResponseRecord) -> Result<ResponseRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResponseId) -> Result<Option<ResponseRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<AssessmentService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = AssessmentService::new(Arc::new(store.clone()), engine());
    (Arc::new(service), store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
