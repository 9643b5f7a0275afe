use serde::{Deserialize, Serialize};

use super::domain::{Domain, Tier};
use super::scoring::{DomainCoverage, OverallScore};
use super::tables::Benchmarks;

/// A score set against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub user_score: f64,
    pub benchmark: f64,
    pub difference: f64,
    pub tier: Tier,
}

/// Classifies `difference` against a symmetric band of half-width `margin`.
/// Values exactly on the band edge are similar.
pub fn classify(difference: f64, margin: f64) -> Tier {
    if difference > margin {
        Tier::Higher
    } else if difference < -margin {
        Tier::Lower
    } else {
        Tier::Similar
    }
}

pub fn compare(score: f64, benchmark: f64, margin: f64) -> Comparison {
    let difference = score - benchmark;
    Comparison {
        user_score: score,
        benchmark,
        difference,
        tier: classify(difference, margin),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainComparison {
    pub domain: Domain,
    /// Numeric answers behind the score. Zero means the score is the floor value.
    pub answered: usize,
    #[serde(flatten)]
    pub comparison: Comparison,
}

/// Overall comparison plus one per domain, each against its own benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSet {
    pub overall: Comparison,
    pub domains: Vec<DomainComparison>,
}

impl ComparisonSet {
    pub fn build(
        scores: &OverallScore,
        coverage: &[DomainCoverage],
        benchmarks: &Benchmarks,
        margin: f64,
    ) -> Self {
        let overall = compare(scores.overall, benchmarks.overall, margin);
        let domains = Domain::ordered()
            .into_iter()
            .map(|domain| DomainComparison {
                domain,
                answered: coverage
                    .iter()
                    .find(|entry| entry.domain == domain)
                    .map(|entry| entry.answered)
                    .unwrap_or_default(),
                comparison: compare(
                    scores.categories.get(domain),
                    benchmarks.domain(domain),
                    margin,
                ),
            })
            .collect();

        Self { overall, domains }
    }

    pub fn domain(&self, domain: Domain) -> Option<&Comparison> {
        self.domains
            .iter()
            .find(|entry| entry.domain == domain)
            .map(|entry| &entry.comparison)
    }

    /// Whether any domain received a numeric answer. An empty survey has no
    /// evidence to draw domain recommendations from.
    pub fn any_answered(&self) -> bool {
        self.domains.iter().any(|entry| entry.answered > 0)
    }

    /// Domains that landed in `tier`, in iteration order.
    pub fn domains_in(&self, tier: Tier) -> impl Iterator<Item = Domain> + '_ {
        self.domains
            .iter()
            .filter(move |entry| entry.comparison.tier == tier)
            .map(|entry| entry.domain)
    }
}
