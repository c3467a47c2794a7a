//! Question generation and answer explanation through an external text model.

mod ai_text_service;
pub mod config;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use study_core::model::{AnswerLabel, Topic};

use crate::error::GenerationError;

pub use ai_text_service::AiTextService;
pub use config::{AiConfig, AiProvider};

/// A backend that turns a natural-language prompt into a text reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend is unavailable or replies without text.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Builds study prompts and sends them to a [`TextGenerator`].
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationClient {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask for one four-option question on `topic`, ending in `Answer: X`.
    ///
    /// # Errors
    ///
    /// Propagates the backend's `GenerationError`.
    pub async fn generate_question(&self, topic: Topic) -> Result<String, GenerationError> {
        info!(topic = topic.name(), "generating question");
        let prompt = question_prompt(topic);
        self.generator
            .complete(&prompt)
            .await
            .inspect_err(|err| warn!(topic = topic.name(), error = %err, "question generation failed"))
    }

    /// Ask whether `selected` is right for `question`, with an explanation.
    ///
    /// # Errors
    ///
    /// Propagates the backend's `GenerationError`.
    pub async fn explain_answer(
        &self,
        topic: Topic,
        question: &str,
        selected: AnswerLabel,
    ) -> Result<String, GenerationError> {
        info!(topic = topic.name(), selected = %selected, "requesting explanation");
        let prompt = explanation_prompt(topic, question, selected);
        self.generator
            .complete(&prompt)
            .await
            .inspect_err(|err| warn!(topic = topic.name(), error = %err, "explanation failed"))
    }
}

#[must_use]
pub fn question_prompt(topic: Topic) -> String {
    format!(
        "Generate a multiple choice question on the topic: {topic}.\n\
         Include 4 answer options labeled A to D.\n\
         Clearly indicate the correct answer at the end using the format:\n\n\
         'Answer: X'"
    )
}

#[must_use]
pub fn explanation_prompt(topic: Topic, question: &str, selected: AnswerLabel) -> String {
    format!(
        "The user selected answer {selected} to the following question:\n\n\
         {question}\n\n\
         The topic is {topic}. Is this the correct answer? \
         If not, explain why and give the correct one."
    )
}
