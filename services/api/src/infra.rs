use death_literacy::assessment::{ResponseId, ResponseRecord, ResponseStore, StoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local response store. Contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResponseStore {
    records: Arc<Mutex<HashMap<ResponseId, ResponseRecord>>>,
}

impl InMemoryResponseStore {
    fn records(&self) -> Result<MutexGuard<'_, HashMap<ResponseId, ResponseRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("response store mutex poisoned".to_string()))
    }
}

impl ResponseStore for InMemoryResponseStore {
    fn insert(&self, record: ResponseRecord) -> Result<ResponseRecord, StoreError> {
        let mut guard = self.records()?;
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, StoreError> {
        Ok(self.records()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ResponseRecord>, StoreError> {
        let mut records: Vec<ResponseRecord> = self.records()?.values().cloned().collect();
        records.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(records)
    }
}
