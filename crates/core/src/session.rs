//! Per-user study session state.
//!
//! A [`StudySession`] is owned by whoever drives the interaction; nothing here is
//! global, so separate users simply hold separate sessions.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AccuracyReport, AnswerAttempt, AnswerLabel, Question, Topic, TopicStats};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("no active question; generate one first")]
    NoActiveQuestion,
}

/// Lifecycle of the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    QuestionReady,
    Answered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    question: Option<Question>,
    selected_answer: AnswerLabel,
    answered: bool,
    stats: TopicStats,
    log: Vec<AnswerAttempt>,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}

impl StudySession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            question: None,
            selected_answer: AnswerLabel::default(),
            answered: false,
            stats: TopicStats::new(),
            log: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.question, self.answered) {
            (None, _) => SessionPhase::Idle,
            (Some(_), false) => SessionPhase::QuestionReady,
            (Some(_), true) => SessionPhase::Answered,
        }
    }

    #[must_use]
    pub fn active_topic(&self) -> Option<Topic> {
        self.question.as_ref().map(Question::topic)
    }

    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<AnswerLabel> {
        self.question.as_ref().and_then(Question::correct_answer)
    }

    #[must_use]
    pub fn selected_answer(&self) -> AnswerLabel {
        self.selected_answer
    }

    #[must_use]
    pub fn stats(&self) -> &TopicStats {
        &self.stats
    }

    #[must_use]
    pub fn log(&self) -> &[AnswerAttempt] {
        &self.log
    }

    #[must_use]
    pub fn report(&self) -> AccuracyReport {
        self.stats.report()
    }

    /// Replace the active question, discarding any previous one.
    pub fn install_question(&mut self, question: Question) -> &Question {
        self.answered = false;
        self.question.insert(question)
    }

    /// Move the answer selector. Does not submit.
    pub fn select_answer(&mut self, label: AnswerLabel) {
        self.selected_answer = label;
    }

    /// Grade the selected answer against the active question and record it.
    ///
    /// Every call is recorded, including repeats against the same question.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::NoActiveQuestion` and leaves the session untouched
    /// when nothing has been generated yet.
    pub fn record_submission(
        &mut self,
        answered_at: DateTime<Utc>,
    ) -> Result<&AnswerAttempt, SessionStateError> {
        let question = self
            .question
            .as_ref()
            .ok_or(SessionStateError::NoActiveQuestion)?;

        let selected = self.selected_answer;
        let correct = question.grade(selected);
        let attempt = AnswerAttempt::new(
            answered_at,
            question.topic(),
            question.body(),
            selected,
            correct,
        );

        self.stats.record(attempt.topic, correct);
        self.answered = true;
        self.log.push(attempt);
        Ok(&self.log[self.log.len() - 1])
    }
}
