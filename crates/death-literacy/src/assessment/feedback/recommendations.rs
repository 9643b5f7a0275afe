use crate::assessment::comparison::ComparisonSet;
use crate::assessment::domain::{Demographics, Domain, Tier};
use crate::assessment::tables::ScoringTables;

/// Ordered action items for a respondent, capped at the configured limit.
///
/// Each lower domain contributes the head of its catalog in domain order, then a
/// matching age bracket adds one sentence. A survey with no numeric answers at all
/// skips the domain items. An empty list falls back to the generic suggestions.
/// Entries are not deduplicated.
pub fn recommend(
    tables: &ScoringTables,
    comparisons: &ComparisonSet,
    demographics: Option<&Demographics>,
) -> Vec<String> {
    let catalogs = &tables.recommendations;

    let lower: Vec<Domain> = if comparisons.any_answered() {
        comparisons.domains_in(Tier::Lower).collect()
    } else {
        Vec::new()
    };

    let mut recommendations: Vec<String> = lower
        .into_iter()
        .flat_map(|domain| {
            catalogs
                .catalog(domain)
                .iter()
                .take(catalogs.per_lower_domain)
                .cloned()
        })
        .collect();

    let bracket = demographics
        .and_then(|demographics| demographics.age.as_deref())
        .and_then(|age| catalogs.age_bracket(age));
    if let Some(bracket) = bracket {
        recommendations.push(bracket.sentence());
    }

    if recommendations.is_empty() {
        recommendations = catalogs.fallback.clone();
    }

    recommendations.truncate(catalogs.limit);
    recommendations
}
