use crate::commands::{run_regenerate, run_score, RegenerateArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use death_literacy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Death Literacy Assessment",
    about = "Score death literacy assessments and serve reports over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single answer set and print the report
    Score(ScoreArgs),
    /// Regenerate reports for every respondent in a response export
    Regenerate(RegenerateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Regenerate(args) => run_regenerate(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["death-literacy-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_score_arguments() {
        let cli = Cli::try_parse_from([
            "death-literacy-api",
            "score",
            "--answers",
            "answers.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.answers.to_str(), Some("answers.json"));
                assert!(args.json);
                assert!(args.demographics.is_none());
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn regenerate_requires_responses() {
        let err = Cli::try_parse_from(["death-literacy-api", "regenerate"])
            .expect_err("responses flag is required");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
