use super::recommendations::recommend;
use super::views::{DomainInsight, FeedbackReport};
use crate::assessment::comparison::ComparisonSet;
use crate::assessment::domain::{Demographics, Tier};
use crate::assessment::tables::ScoringTables;

/// Builds the narrative feedback for one respondent.
///
/// The summary depends only on the overall tier. Domains above their benchmark
/// become strengths and those below become improvements, including zero-floored
/// domains with no answers; domains in the similar band contribute to neither list.
pub fn synthesize(
    tables: &ScoringTables,
    comparisons: &ComparisonSet,
    demographics: Option<&Demographics>,
) -> FeedbackReport {
    let templates = &tables.templates;
    let summary = templates
        .overall
        .for_tier(comparisons.overall.tier)
        .to_string();

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for entry in &comparisons.domains {
        let line = || {
            format!(
                "{}: {}",
                entry.domain.display_name(),
                templates.domain(entry.domain, entry.comparison.tier)
            )
        };
        match entry.comparison.tier {
            Tier::Higher => strengths.push(line()),
            Tier::Lower => improvements.push(line()),
            Tier::Similar => {}
        }
    }

    FeedbackReport {
        summary,
        strengths,
        improvements,
        recommendations: recommend(tables, comparisons, demographics),
    }
}

/// Tier message for every domain, including those in the similar band.
pub fn domain_insights(tables: &ScoringTables, comparisons: &ComparisonSet) -> Vec<DomainInsight> {
    comparisons
        .domains
        .iter()
        .map(|entry| DomainInsight {
            domain: entry.domain,
            label: entry.domain.label().to_string(),
            tier: entry.comparison.tier,
            tier_label: entry.comparison.tier.label().to_string(),
            message: tables
                .templates
                .domain(entry.domain, entry.comparison.tier)
                .to_string(),
        })
        .collect()
}
