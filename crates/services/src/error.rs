//! Shared error types for the services crate.

use thiserror::Error;

use study_core::SessionStateError;

/// Errors emitted by the generation backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("question generation is not configured (set STUDY_AI_API_KEY)")]
    Disabled,
    #[error("generation service returned an empty response")]
    EmptyResponse,
    #[error("generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while reading generation settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown provider {0:?} (expected \"gemini\" or \"openai\")")]
    UnknownProvider(String),
    #[error("invalid temperature {0:?}")]
    InvalidTemperature(String),
}

/// Errors emitted by `StudyController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    State(#[from] SessionStateError),
    #[error("Analysis Error: {0}")]
    Generation(#[from] GenerationError),
}
