use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::{AnswerSet, Demographics};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseId(pub String);

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored raw answers. This is the source of truth; reports are always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: ResponseId,
    pub submitted_at: DateTime<Utc>,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
}

/// Storage abstraction so the service can be exercised without a database.
/// Records are write-once: a second insert under the same id is a conflict.
pub trait ResponseStore: Send + Sync {
    fn insert(&self, record: ResponseRecord) -> Result<ResponseRecord, StoreError>;
    fn fetch(&self, id: &ResponseId) -> Result<Option<ResponseRecord>, StoreError>;
    fn list(&self) -> Result<Vec<ResponseRecord>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("response already recorded")]
    Conflict,
    #[error("response not found")]
    NotFound,
    #[error("response store unavailable: {0}")]
    Unavailable(String),
}
