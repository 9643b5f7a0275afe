use crate::assessment::domain::{Domain, Tier};
use serde::{Deserialize, Serialize};

/// Narrative feedback derived from a set of comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInsight {
    pub domain: Domain,
    pub label: String,
    pub tier: Tier,
    pub tier_label: String,
    pub message: String,
}
