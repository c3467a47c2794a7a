#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod generation;

pub use study_core::Clock;

pub use controller::{StudyController, SubmitOutcome, resolve_topic};
pub use error::{ConfigError, GenerationError, StudyError};
pub use generation::{AiConfig, AiProvider, AiTextService, GenerationClient, TextGenerator};
