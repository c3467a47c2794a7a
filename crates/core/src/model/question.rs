use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::Topic;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerLabelError {
    #[error("invalid answer label: {0:?} (expected one of A, B, C, D)")]
    Invalid(String),
}

//
// ─── ANSWER LABEL ─────────────────────────────────────────────────────────────
//

/// One of the four option labels of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AnswerLabel {
    #[default]
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub const ALL: [AnswerLabel; 4] = [AnswerLabel::A, AnswerLabel::B, AnswerLabel::C, AnswerLabel::D];

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            AnswerLabel::A => 'A',
            AnswerLabel::B => 'B',
            AnswerLabel::C => 'C',
            AnswerLabel::D => 'D',
        }
    }
}

impl TryFrom<char> for AnswerLabel {
    type Error = AnswerLabelError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            _ => Err(AnswerLabelError::Invalid(value.to_string())),
        }
    }
}

impl FromStr for AnswerLabel {
    type Err = AnswerLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(AnswerLabelError::Invalid(trimmed.to_string())),
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

//
// ─── PARSE RESULT ─────────────────────────────────────────────────────────────
//

/// Outcome of splitting generated text into a question body and its answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuestion {
    /// An `Answer: X` marker was found and stripped from the body.
    Parsed { body: String, answer: AnswerLabel },
    /// No marker; the body is the trimmed input.
    Unparsed { body: String },
}

impl ParsedQuestion {
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            ParsedQuestion::Parsed { body, .. } | ParsedQuestion::Unparsed { body } => body,
        }
    }

    #[must_use]
    pub fn answer(&self) -> Option<AnswerLabel> {
        match self {
            ParsedQuestion::Parsed { answer, .. } => Some(*answer),
            ParsedQuestion::Unparsed { .. } => None,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// The question currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    topic: Topic,
    body: String,
    correct_answer: Option<AnswerLabel>,
}

impl Question {
    #[must_use]
    pub fn new(topic: Topic, body: impl Into<String>, correct_answer: Option<AnswerLabel>) -> Self {
        Self {
            topic,
            body: body.into(),
            correct_answer,
        }
    }

    #[must_use]
    pub fn from_parsed(topic: Topic, parsed: ParsedQuestion) -> Self {
        match parsed {
            ParsedQuestion::Parsed { body, answer } => Self::new(topic, body, Some(answer)),
            ParsedQuestion::Unparsed { body } => Self::new(topic, body, None),
        }
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<AnswerLabel> {
        self.correct_answer
    }

    /// Returns true when `selected` matches the answer key.
    ///
    /// A question without an answer key never grades as correct.
    #[must_use]
    pub fn grade(&self, selected: AnswerLabel) -> bool {
        self.correct_answer == Some(selected)
    }
}
