use chrono::{DateTime, Utc};

use crate::model::{AnswerLabel, Topic};

/// Record of a single answer submission.
///
/// Appended to the session log in submission order and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerAttempt {
    pub answered_at: DateTime<Utc>,
    pub topic: Topic,
    pub question: String,
    pub selected: AnswerLabel,
    pub correct: bool,
}

impl AnswerAttempt {
    #[must_use]
    pub fn new(
        answered_at: DateTime<Utc>,
        topic: Topic,
        question: impl Into<String>,
        selected: AnswerLabel,
        correct: bool,
    ) -> Self {
        Self {
            answered_at,
            topic,
            question: question.into(),
            selected,
            correct,
        }
    }
}
