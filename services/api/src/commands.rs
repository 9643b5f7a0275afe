use crate::render::render_report;
use clap::Args;
use death_literacy::assessment::{
    import_responses_from_path, AnswerSet, AssessmentEngine, Demographics, ScoringTables,
};
use death_literacy::config::AppConfig;
use death_literacy::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question ids to responses
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Optional JSON object with respondent demographics
    #[arg(long)]
    pub(crate) demographics: Option<PathBuf>,
    /// Alternate scoring tables (defaults to APP_SCORING_TABLES or the built-in tables)
    #[arg(long)]
    pub(crate) tables: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RegenerateArgs {
    /// CSV export with respondent_id,question_id,value columns
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Alternate scoring tables (defaults to APP_SCORING_TABLES or the built-in tables)
    #[arg(long)]
    pub(crate) tables: Option<PathBuf>,
    /// Print the reports as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        demographics,
        tables,
        json,
    } = args;

    let engine = AssessmentEngine::new(load_tables(tables)?);
    let answers: AnswerSet = read_json(&answers)?;
    let demographics: Option<Demographics> = demographics
        .map(|path| read_json(&path))
        .transpose()?;

    let report = engine.evaluate(&answers, demographics.as_ref());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report("Death literacy report", &report));
    }

    Ok(())
}

pub(crate) fn run_regenerate(args: RegenerateArgs) -> Result<(), AppError> {
    let RegenerateArgs {
        responses,
        tables,
        json,
    } = args;

    let engine = AssessmentEngine::new(load_tables(tables)?);
    let responses = import_responses_from_path(&responses)?;

    if json {
        let reports: Vec<_> = responses
            .iter()
            .map(|response| {
                json!({
                    "respondent_id": response.respondent_id,
                    "report": engine.evaluate(&response.answers, None),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Regenerated {} report(s)", responses.len());
    for response in &responses {
        let report = engine.evaluate(&response.answers, None);
        let heading = format!("Respondent {}", response.respondent_id);
        print!("\n{}", render_report(&heading, &report));
    }

    Ok(())
}

/// Explicit path first, then the configured path, then the built-in tables.
pub(crate) fn load_tables(path: Option<PathBuf>) -> Result<ScoringTables, AppError> {
    match path {
        Some(path) => Ok(ScoringTables::from_path(path)?),
        None => Ok(AppConfig::load()?.scoring.tables()?),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
