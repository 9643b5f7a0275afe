use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{AnswerSet, Domain};
use super::tables::ScoringTables;

/// Question ids for a domain name. Unknown names map to an empty list.
pub fn questions_for<'a>(tables: &'a ScoringTables, domain_name: &str) -> &'a [String] {
    Domain::from_key(domain_name)
        .map(|domain| tables.questions(domain))
        .unwrap_or_default()
}

/// Numeric sum and count of the answered questions in `question_ids`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Tally {
    pub sum: f64,
    pub answered: usize,
}

impl Tally {
    pub fn mean(&self) -> Option<f64> {
        if self.answered == 0 {
            None
        } else {
            Some(self.sum / self.answered as f64)
        }
    }
}

pub(crate) fn tally(answers: &AnswerSet, question_ids: &[String]) -> Tally {
    let mut tally = Tally::default();
    for question_id in question_ids {
        let Some(value) = answers.get(question_id) else {
            continue;
        };
        match value.as_integer() {
            Some(parsed) => {
                tally.sum += parsed as f64;
                tally.answered += 1;
            }
            None => warn!(question_id = %question_id, "skipping non-numeric answer"),
        }
    }
    tally
}

/// Maps a mean on the 1-5 scale onto 0-10. Every domain goes through this formula
/// regardless of the question's native scale, so a 1-7 item can land above 10.
pub fn rescale(mean: f64) -> f64 {
    ((mean - 1.0) / 4.0) * 10.0
}

/// Domain score in the 0-10 range; zero when nothing in the domain was answered.
pub fn domain_score(tables: &ScoringTables, answers: &AnswerSet, domain: Domain) -> f64 {
    tally(answers, tables.questions(domain))
        .mean()
        .map(rescale)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skills: f64,
    pub experience: f64,
    pub knowledge: f64,
    pub community: f64,
}

impl CategoryScores {
    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Skills => self.skills,
            Domain::Experience => self.experience,
            Domain::Knowledge => self.knowledge,
            Domain::Community => self.community,
        }
    }

    pub fn mean(&self) -> f64 {
        (self.skills + self.experience + self.knowledge + self.community) / 4.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub overall: f64,
    pub categories: CategoryScores,
}

/// Unweighted mean of the four domain scores. Zero-floored domains still count.
pub fn overall_score(tables: &ScoringTables, answers: &AnswerSet) -> OverallScore {
    let categories = CategoryScores {
        skills: domain_score(tables, answers, Domain::Skills),
        experience: domain_score(tables, answers, Domain::Experience),
        knowledge: domain_score(tables, answers, Domain::Knowledge),
        community: domain_score(tables, answers, Domain::Community),
    };

    OverallScore {
        overall: categories.mean(),
        categories,
    }
}

/// How many of a domain's questions carried a numeric answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCoverage {
    pub domain: Domain,
    pub answered: usize,
    pub expected: usize,
}

pub fn coverage(tables: &ScoringTables, answers: &AnswerSet) -> Vec<DomainCoverage> {
    Domain::ordered()
        .into_iter()
        .map(|domain| {
            let questions = tables.questions(domain);
            DomainCoverage {
                domain,
                answered: tally(answers, questions).answered,
                expected: questions.len(),
            }
        })
        .collect()
}
