mod attempt;
mod question;
mod stats;
mod topic;

pub use attempt::AnswerAttempt;
pub use question::{AnswerLabel, AnswerLabelError, ParsedQuestion, Question};
pub use stats::{AccuracyReport, FocusLevel, TopicAccuracy, TopicStats, TopicTally};
pub use topic::{Topic, TopicError, TopicSelector};
