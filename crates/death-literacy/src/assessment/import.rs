//! Bulk response import for report regeneration.
//!
//! Expects a CSV export with one row per answered question:
//! `respondent_id,question_id,value`.

use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{AnswerSet, AnswerValue};

/// Answers collected for one respondent, in the order respondents first appear.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedResponse {
    pub respondent_id: String,
    pub answers: AnswerSet,
}

pub fn import_responses<R: Read>(reader: R) -> Result<Vec<ImportedResponse>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut responses: Vec<ImportedResponse> = Vec::new();

    for (index, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
        let row = record?;
        if row.respondent_id.is_empty() || row.question_id.is_empty() {
            return Err(ImportError::MissingIdentifier { row: index + 1 });
        }
        let Some(value) = row.value else {
            continue;
        };

        let position = responses
            .iter()
            .position(|response| response.respondent_id == row.respondent_id);
        let response = match position {
            Some(position) => &mut responses[position],
            None => {
                responses.push(ImportedResponse {
                    respondent_id: row.respondent_id.clone(),
                    answers: AnswerSet::new(),
                });
                let last = responses.len() - 1;
                &mut responses[last]
            }
        };
        response.answers.insert(row.question_id, to_answer(&value));
    }

    Ok(responses)
}

pub fn import_responses_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<ImportedResponse>, ImportError> {
    let file = File::open(path.as_ref())?;
    import_responses(file)
}

fn to_answer(raw: &str) -> AnswerValue {
    match raw.parse::<i64>() {
        Ok(value) => AnswerValue::Integer(value),
        Err(_) => match raw.to_ascii_lowercase().as_str() {
            "true" => AnswerValue::Flag(true),
            "false" => AnswerValue::Flag(false),
            _ => AnswerValue::Text(raw.to_string()),
        },
    }
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    respondent_id: String,
    question_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to parse response export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read response export: {0}")]
    Io(#[from] std::io::Error),
    #[error("response row {row} is missing a respondent or question id")]
    MissingIdentifier { row: usize },
}
