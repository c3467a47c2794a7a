use thiserror::Error;

use study_core::model::{AnswerLabel, AnswerLabelError, TopicError, TopicSelector};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Topic(#[from] TopicError),
    #[error(transparent)]
    Answer(#[from] AnswerLabelError),
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Topics,
    /// Change the topic selector without generating.
    Topic(TopicSelector),
    /// Generate using the given selector, or the current one when `None`.
    Generate(Option<TopicSelector>),
    Select(AnswerLabel),
    /// Submit the given answer, or the current selection when `None`.
    Submit(Option<AnswerLabel>),
    Explain,
    Show,
    Stats,
    History,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "h" | "?" => Self::Help,
            "topics" | "t" => Self::Topics,
            "topic" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("topic"));
                }
                Self::Topic(rest.parse()?)
            }
            "generate" | "gen" | "g" => {
                Self::Generate((!rest.is_empty()).then(|| rest.parse()).transpose()?)
            }
            "select" | "s" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("select"));
                }
                Self::Select(rest.parse()?)
            }
            "submit" | "answer" => {
                Self::Submit((!rest.is_empty()).then(|| rest.parse()).transpose()?)
            }
            "explain" | "e" => Self::Explain,
            "show" | "question" => Self::Show,
            "stats" | "focus" => Self::Stats,
            "history" | "log" => Self::History,
            "quit" | "exit" => Self::Quit,
            // A bare letter submits it, the quickest way to answer.
            single if single.len() == 1 && single.parse::<AnswerLabel>().is_ok() => {
                Self::Submit(Some(single.parse()?))
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use study_core::model::Topic;

    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn generate_variants() {
        assert_eq!(parse("generate"), Command::Generate(None));
        assert_eq!(parse("g random"), Command::Generate(Some(TopicSelector::Random)));
        assert_eq!(parse("g 0"), Command::Generate(Some(TopicSelector::Random)));
        assert_eq!(
            parse("gen 5"),
            Command::Generate(Some(TopicSelector::Topic(Topic::RegressionAnalysis)))
        );
        assert_eq!(
            parse("generate Experimental Design"),
            Command::Generate(Some(TopicSelector::Topic(Topic::ExperimentalDesign)))
        );
    }

    #[test]
    fn answers() {
        assert_eq!(parse("select b"), Command::Select(AnswerLabel::B));
        assert_eq!(parse("submit"), Command::Submit(None));
        assert_eq!(parse("submit D"), Command::Submit(Some(AnswerLabel::D)));
        assert_eq!(parse("c"), Command::Submit(Some(AnswerLabel::C)));
        assert_eq!(parse("a"), Command::Submit(Some(AnswerLabel::A)));
    }

    #[test]
    fn errors() {
        assert_eq!(
            Command::parse("dance").unwrap_err(),
            CommandError::Unknown("dance".into())
        );
        assert_eq!(
            Command::parse("select").unwrap_err(),
            CommandError::MissingArgument("select")
        );
        assert!(matches!(
            Command::parse("submit Z").unwrap_err(),
            CommandError::Answer(_)
        ));
        assert!(matches!(
            Command::parse("topic 99").unwrap_err(),
            CommandError::Topic(_)
        ));
    }

    #[test]
    fn words_are_case_insensitive() {
        assert_eq!(parse("EXPLAIN"), Command::Explain);
        assert_eq!(parse("Stats"), Command::Stats);
        assert_eq!(parse("quit"), Command::Quit);
    }
}
