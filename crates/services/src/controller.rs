use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use study_core::model::{AccuracyReport, AnswerAttempt, AnswerLabel, Question, Topic, TopicSelector};
use study_core::{Clock, SessionStateError, StudySession, parse_question};

use crate::error::StudyError;
use crate::generation::GenerationClient;

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub attempt: AnswerAttempt,
    /// Answer key of the active question, `None` if the reply had no marker.
    pub correct_answer: Option<AnswerLabel>,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.attempt.correct
    }
}

/// Resolve `Random` with a uniform pick over the catalog.
#[must_use]
pub fn resolve_topic<R: Rng>(selector: TopicSelector, rng: &mut R) -> Topic {
    match selector {
        TopicSelector::Topic(topic) => topic,
        TopicSelector::Random => Topic::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Topic::DescriptiveStatistics),
    }
}

/// Drives generate / submit / explain against a caller-owned [`StudySession`].
#[derive(Clone)]
pub struct StudyController {
    clock: Clock,
    client: GenerationClient,
}

impl StudyController {
    #[must_use]
    pub fn new(clock: Clock, client: GenerationClient) -> Self {
        Self { clock, client }
    }

    /// Generate a fresh question for `selector` and make it the active one.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Generation` when the backend fails; the session is left as it was.
    pub async fn generate<'s>(
        &self,
        session: &'s mut StudySession,
        selector: TopicSelector,
    ) -> Result<&'s Question, StudyError> {
        // Owned RNG keeps the future `Send`.
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.generate_with_rng(session, selector, &mut rng).await
    }

    /// [`StudyController::generate`] with a caller-supplied RNG for resolving `Random`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Generation` when the backend fails; the session is left as it was.
    pub async fn generate_with_rng<'s, R: Rng>(
        &self,
        session: &'s mut StudySession,
        selector: TopicSelector,
        rng: &mut R,
    ) -> Result<&'s Question, StudyError> {
        let topic = resolve_topic(selector, rng);
        self.generate_for(session, topic).await
    }

    /// Generate a question for a concrete topic.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Generation` when the backend fails; the session is left as it was.
    pub async fn generate_for<'s>(
        &self,
        session: &'s mut StudySession,
        topic: Topic,
    ) -> Result<&'s Question, StudyError> {
        let raw = self.client.generate_question(topic).await?;
        let parsed = parse_question(&raw);
        if parsed.answer().is_none() {
            debug!(topic = topic.name(), "reply had no answer marker");
        }
        Ok(session.install_question(Question::from_parsed(topic, parsed)))
    }

    /// Select `label` and submit it against the active question.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::State` when no question is active; nothing is recorded.
    pub fn submit(
        &self,
        session: &mut StudySession,
        label: AnswerLabel,
    ) -> Result<SubmitOutcome, StudyError> {
        if session.active_question().is_none() {
            return Err(SessionStateError::NoActiveQuestion.into());
        }
        session.select_answer(label);
        let attempt = session.record_submission(self.clock.now())?.clone();
        info!(
            topic = attempt.topic.name(),
            selected = %attempt.selected,
            correct = attempt.correct,
            "answer submitted"
        );
        Ok(SubmitOutcome {
            correct_answer: session.correct_answer(),
            attempt,
        })
    }

    /// Explain the currently selected answer for the active question.
    ///
    /// Uses the selector's value, which need not be the last submitted answer.
    /// Stats and the attempt log are not touched.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::State` without an active question, or
    /// `StudyError::Generation` when the backend fails.
    pub async fn explain(&self, session: &StudySession) -> Result<String, StudyError> {
        let question = session
            .active_question()
            .ok_or(SessionStateError::NoActiveQuestion)?;
        let text = self
            .client
            .explain_answer(question.topic(), question.body(), session.selected_answer())
            .await?;
        Ok(text)
    }

    #[must_use]
    pub fn report(&self, session: &StudySession) -> AccuracyReport {
        session.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_topic_passes_through() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            resolve_topic(TopicSelector::Topic(Topic::SurvivalAnalysis), &mut rng),
            Topic::SurvivalAnalysis
        );
    }

    #[test]
    fn random_resolves_to_catalog_members() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..2_000 {
            let topic = resolve_topic(TopicSelector::Random, &mut rng);
            assert!(Topic::ALL.contains(&topic));
            assert_ne!(topic.name(), TopicSelector::RANDOM_LABEL);
            seen.insert(topic);
        }
        assert_eq!(seen.len(), Topic::ALL.len());
    }
}
