use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The four knowledge domains of the death literacy index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Skills,
    Experience,
    Knowledge,
    Community,
}

impl Domain {
    /// Iteration order used for every per-domain list in a report.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Skills,
            Self::Experience,
            Self::Knowledge,
            Self::Community,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Knowledge => "knowledge",
            Self::Community => "community",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Skills => "Practical skills",
            Self::Experience => "Experiential knowledge",
            Self::Knowledge => "Factual knowledge",
            Self::Community => "Community knowledge",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|domain| domain.key() == value)
    }

    /// Key with its first letter upper-cased, used as the prefix of feedback lines.
    pub fn display_name(self) -> String {
        capitalize_first(self.key())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub(crate) fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of comparing a score against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Higher,
    Similar,
    Lower,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Higher => "Higher than benchmark",
            Self::Similar => "Similar to benchmark",
            Self::Lower => "Lower than benchmark",
        }
    }
}

/// A single survey response as collected by the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Decimal(f64),
    Flag(bool),
    Text(String),
}

impl AnswerValue {
    /// Integer reading of the response. Decimals truncate toward zero and text is
    /// trimmed first; flags and unparseable text have no numeric reading.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(value) => truncate(*value),
            Self::Flag(_) => None,
            Self::Text(raw) => {
                let trimmed = raw.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(truncate))
            }
        }
    }
}

fn truncate(value: f64) -> Option<i64> {
    if value.is_finite() {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Sparse mapping of question identifier to response. Treated as immutable once
/// scoring starts; the engine only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Optional respondent attributes. Used for personalisation only, never for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_illness: Option<bool>,
}

impl Demographics {
    pub fn with_age(age: impl Into<String>) -> Self {
        Self {
            age: Some(age.into()),
            ..Self::default()
        }
    }
}
