mod command;
mod error;
mod logger;
mod render;
mod shell;

use std::sync::Arc;

use services::{AiConfig, AiTextService, Clock, GenerationClient, StudyController};
use study_core::model::TopicSelector;
use tokio::io::BufReader;
use tracing::{info, warn};

use crate::error::{AppError, ArgsError};
use crate::shell::Shell;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  exam-study [--topic <selector>] [--log-level <level>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --topic <selector>     starting topic: random (or 0), 1-13 or a topic name (default: random)");
    eprintln!("  --log-level <level>    tracing filter, e.g. info or services=debug (default: RUST_LOG or warn)");
    eprintln!();
    eprintln!("Environment (also read from .env):");
    eprintln!("  STUDY_AI_API_KEY       required to generate questions");
    eprintln!("  STUDY_AI_PROVIDER      gemini (default) or openai");
    eprintln!("  STUDY_AI_BASE_URL, STUDY_AI_MODEL, STUDY_AI_TEMPERATURE");
}

#[derive(Debug, Default)]
struct Args {
    topic: TopicSelector,
    log_level: Option<String>,
    help: bool,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, AppError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => {
                    let value = require_value(&mut args, "--topic")?;
                    parsed.topic = value
                        .parse::<TopicSelector>()
                        .map_err(|_| ArgsError::InvalidTopic { raw: value })?;
                }
                "--log-level" => {
                    parsed.log_level = Some(require_value(&mut args, "--log-level")?);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg).into()),
            }
        }
        Ok(parsed)
    }
}

async fn run() -> Result<(), AppError> {
    // A missing .env file is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let args = Args::parse(std::env::args().skip(1)).inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }
    logger::init(args.log_level.as_deref())?;

    let config = AiConfig::from_env()?;
    match &config {
        Some(config) => info!(provider = config.provider.as_str(), model = %config.model, "generation configured"),
        None => {
            warn!("STUDY_AI_API_KEY is not set; generation is disabled");
            eprintln!("note: set STUDY_AI_API_KEY to enable question generation");
        }
    }

    let client = GenerationClient::new(Arc::new(AiTextService::new(config)));
    let controller = StudyController::new(Clock::system(), client);
    let mut shell = Shell::new(controller, args.topic);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell.run(stdin, &mut stdout).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use study_core::model::Topic;

    use super::*;

    fn args(list: &[&str]) -> Result<Args, AppError> {
        Args::parse(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.topic, TopicSelector::Random);
        assert_eq!(parsed.log_level, None);
        assert!(!parsed.help);
    }

    #[test]
    fn flags() {
        let parsed = args(&["--topic", "7", "--log-level", "debug"]).unwrap();
        assert_eq!(parsed.topic, TopicSelector::Topic(Topic::SurvivalAnalysis));
        assert_eq!(parsed.log_level.as_deref(), Some("debug"));
        assert!(args(&["-h"]).unwrap().help);
    }

    #[test]
    fn bad_flags() {
        assert!(matches!(
            args(&["--topic"]).unwrap_err(),
            AppError::Args(ArgsError::MissingValue { flag: "--topic" })
        ));
        assert!(matches!(
            args(&["--topic", "Alchemy"]).unwrap_err(),
            AppError::Args(ArgsError::InvalidTopic { .. })
        ));
        assert!(matches!(
            args(&["--db"]).unwrap_err(),
            AppError::Args(ArgsError::UnknownArg(_))
        ));
    }
}
