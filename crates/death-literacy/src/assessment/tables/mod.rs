//! Versioned configuration tables consumed by the scoring engine.
//!
//! The built-in tables come from [`ScoringTables::standard`]. Deployments and tests
//! can substitute their own document through [`ScoringTables::from_reader`]; the
//! engine never reads tables from anywhere else.

mod standard;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::domain::{Domain, Tier};

/// Complete set of tables for one version of the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    pub version: String,
    pub categories: BTreeMap<Domain, Vec<String>>,
    pub social_questions: Vec<String>,
    pub benchmarks: Benchmarks,
    pub thresholds: TierThresholds,
    pub templates: FeedbackTemplates,
    pub recommendations: RecommendationTables,
}

/// National reference scores. Domain and overall values are on the 0-10 scale, the
/// social connection value on the native 1-4 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub overall: f64,
    pub domains: BTreeMap<Domain, f64>,
    pub social_connection: f64,
}

impl Benchmarks {
    pub fn domain(&self, domain: Domain) -> f64 {
        self.domains.get(&domain).copied().unwrap_or_default()
    }
}

/// Half-widths of the "similar" band. A difference exactly on the margin is similar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub domain_margin: f64,
    pub social_margin: f64,
}

impl TierThresholds {
    pub const DEFAULT_DOMAIN_MARGIN: f64 = 1.0;
    pub const DEFAULT_SOCIAL_MARGIN: f64 = 0.5;
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            domain_margin: Self::DEFAULT_DOMAIN_MARGIN,
            social_margin: Self::DEFAULT_SOCIAL_MARGIN,
        }
    }
}

/// One text per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierText {
    pub higher: String,
    pub similar: String,
    pub lower: String,
}

impl TierText {
    pub fn for_tier(&self, tier: Tier) -> &str {
        match tier {
            Tier::Higher => &self.higher,
            Tier::Similar => &self.similar,
            Tier::Lower => &self.lower,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTemplates {
    pub overall: TierText,
    pub domains: BTreeMap<Domain, TierText>,
}

impl FeedbackTemplates {
    pub fn domain(&self, domain: Domain, tier: Tier) -> &str {
        self.domains
            .get(&domain)
            .map(|text| text.for_tier(tier))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub key: String,
    pub message: String,
    pub focus: String,
}

impl AgeBracket {
    pub fn sentence(&self) -> String {
        format!("{} Focus on {}.", self.message, self.focus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTables {
    pub catalogs: BTreeMap<Domain, Vec<String>>,
    pub per_lower_domain: usize,
    pub age_brackets: Vec<AgeBracket>,
    pub fallback: Vec<String>,
    pub limit: usize,
}

impl RecommendationTables {
    pub fn catalog(&self, domain: Domain) -> &[String] {
        self.catalogs
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn age_bracket(&self, key: &str) -> Option<&AgeBracket> {
        self.age_brackets.iter().find(|bracket| bracket.key == key)
    }
}

impl ScoringTables {
    /// Built-in tables for the current questionnaire.
    pub fn standard() -> Self {
        standard::tables()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TablesError> {
        let tables: Self = serde_json::from_reader(reader)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TablesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Question ids for a domain, in questionnaire order.
    pub fn questions(&self, domain: Domain) -> &[String] {
        self.categories
            .get(&domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), TablesError> {
        for domain in Domain::ordered() {
            if self.questions(domain).is_empty() {
                return Err(TablesError::MissingQuestions(domain));
            }
            if !self.benchmarks.domains.contains_key(&domain) {
                return Err(TablesError::MissingBenchmark(domain));
            }
            if !self.templates.domains.contains_key(&domain) {
                return Err(TablesError::MissingTemplates(domain));
            }
            let catalog = self.recommendations.catalog(domain);
            if catalog.len() < self.recommendations.per_lower_domain {
                return Err(TablesError::ShortCatalog {
                    domain,
                    entries: catalog.len(),
                    required: self.recommendations.per_lower_domain,
                });
            }
        }

        if self.social_questions.is_empty() {
            return Err(TablesError::MissingSocialQuestions);
        }

        for (name, margin) in [
            ("domain_margin", self.thresholds.domain_margin),
            ("social_margin", self.thresholds.social_margin),
        ] {
            if !margin.is_finite() || margin < 0.0 {
                return Err(TablesError::InvalidMargin { name, value: margin });
            }
        }

        if self.recommendations.fallback.is_empty() {
            return Err(TablesError::MissingFallback);
        }

        Ok(())
    }
}

/// Raised when an alternate tables document cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("unable to read scoring tables from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("scoring tables are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no questions mapped to the {0} domain")]
    MissingQuestions(Domain),
    #[error("no benchmark configured for the {0} domain")]
    MissingBenchmark(Domain),
    #[error("no feedback templates configured for the {0} domain")]
    MissingTemplates(Domain),
    #[error("recommendation catalog for {domain} has {entries} entries, needs {required}")]
    ShortCatalog {
        domain: Domain,
        entries: usize,
        required: usize,
    },
    #[error("no social connection questions configured")]
    MissingSocialQuestions,
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidMargin { name: &'static str, value: f64 },
    #[error("generic fallback recommendations are empty")]
    MissingFallback,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn standard_tables_are_valid() {
        let tables = ScoringTables::standard();
        tables.validate().expect("standard tables validate");

        assert_eq!(tables.thresholds.domain_margin, 1.0);
        assert_eq!(tables.thresholds.social_margin, 0.5);
        assert_eq!(tables.recommendations.age_brackets.len(), 6);
        assert_eq!(tables.recommendations.fallback.len(), 3);
        assert_eq!(tables.recommendations.limit, 5);
        for domain in Domain::ordered() {
            let entries = tables.recommendations.catalog(domain).len();
            assert!((4..=5).contains(&entries), "{domain} catalog has {entries}");
        }
    }

    #[test]
    fn tables_survive_a_json_round_trip() {
        let tables = ScoringTables::standard();
        let encoded = serde_json::to_vec(&tables).expect("tables serialize");
        let decoded = ScoringTables::from_reader(Cursor::new(encoded)).expect("tables load");
        assert_eq!(decoded, tables);
    }

    #[test]
    fn rejects_negative_margin() {
        let mut tables = ScoringTables::standard();
        tables.thresholds.social_margin = -0.5;
        let encoded = serde_json::to_vec(&tables).expect("tables serialize");

        let err = ScoringTables::from_reader(Cursor::new(encoded)).expect_err("invalid margin");
        assert!(matches!(
            err,
            TablesError::InvalidMargin {
                name: "social_margin",
                ..
            }
        ));
    }

    #[test]
    fn rejects_domain_without_questions() {
        let mut tables = ScoringTables::standard();
        tables.categories.remove(&Domain::Knowledge);

        let err = tables.validate().expect_err("knowledge questions required");
        assert!(matches!(err, TablesError::MissingQuestions(Domain::Knowledge)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ScoringTables::from_path("/nonexistent/scoring-tables.json")
            .expect_err("file is missing");
        assert!(err.to_string().contains("/nonexistent/scoring-tables.json"));
    }

    #[test]
    fn age_bracket_sentence_joins_message_and_focus() {
        let bracket = AgeBracket {
            key: "18-24".to_string(),
            message: "Start early.".to_string(),
            focus: "conversations with friends".to_string(),
        };
        assert_eq!(
            bracket.sentence(),
            "Start early. Focus on conversations with friends."
        );
    }
}
