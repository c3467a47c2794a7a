use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("unknown topic: {0}")]
    Unknown(String),
}

//
// ─── TOPIC CATALOG ────────────────────────────────────────────────────────────
//

/// Statistics subject areas a question can be generated for.
///
/// Variant order is catalog order; reports and listings follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    DescriptiveStatistics,
    ProbabilityDistributions,
    HypothesisTesting,
    AdvancedHypothesisTesting,
    RegressionAnalysis,
    ExperimentalDesign,
    SurvivalAnalysis,
    EthicsAndDataIntegrity,
    PreparingWrittenMaterial,
    InterpretingWrittenMaterial,
    DescriptiveAndInferential,
    InterpretingTabularMaterial,
    EvaluatingConclusions,
}

impl Topic {
    /// Every catalog topic, in catalog order.
    pub const ALL: [Topic; 13] = [
        Topic::DescriptiveStatistics,
        Topic::ProbabilityDistributions,
        Topic::HypothesisTesting,
        Topic::AdvancedHypothesisTesting,
        Topic::RegressionAnalysis,
        Topic::ExperimentalDesign,
        Topic::SurvivalAnalysis,
        Topic::EthicsAndDataIntegrity,
        Topic::PreparingWrittenMaterial,
        Topic::InterpretingWrittenMaterial,
        Topic::DescriptiveAndInferential,
        Topic::InterpretingTabularMaterial,
        Topic::EvaluatingConclusions,
    ];

    /// Human-readable catalog name, also used verbatim in generation prompts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topic::DescriptiveStatistics => "Descriptive Statistics & Data Summarization",
            Topic::ProbabilityDistributions => "Probability & Distributions",
            Topic::HypothesisTesting => "Hypothesis Testing Fundamentals",
            Topic::AdvancedHypothesisTesting => {
                "Advanced Hypothesis Testing & Multiple Comparisons"
            }
            Topic::RegressionAnalysis => "Regression Analysis",
            Topic::ExperimentalDesign => "Experimental Design",
            Topic::SurvivalAnalysis => "Survival Analysis",
            Topic::EthicsAndDataIntegrity => "Ethical Considerations & Data Integrity",
            Topic::PreparingWrittenMaterial => "Preparing Written Material",
            Topic::InterpretingWrittenMaterial => "Understanding and Interpreting Written Material",
            Topic::DescriptiveAndInferential => "Descriptive and Inferential Statistics",
            Topic::InterpretingTabularMaterial => {
                "Understanding and Interpreting Tabular Material"
            }
            Topic::EvaluatingConclusions => "Evaluating Conclusions in Light of Known Facts",
        }
    }

    /// Returns the topic at a 1-based catalog position.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|topic| topic.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TopicError::Unknown(wanted.to_string()))
    }
}

//
// ─── TOPIC SELECTOR ───────────────────────────────────────────────────────────
//

/// What the user picked in the topic chooser.
///
/// `Random` has to be resolved to a concrete [`Topic`] before anything is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicSelector {
    #[default]
    Random,
    Topic(Topic),
}

impl TopicSelector {
    pub const RANDOM_LABEL: &'static str = "Random";

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TopicSelector::Random => Self::RANDOM_LABEL,
            TopicSelector::Topic(topic) => topic.name(),
        }
    }
}

impl From<Topic> for TopicSelector {
    fn from(topic: Topic) -> Self {
        Self::Topic(topic)
    }
}

impl FromStr for TopicSelector {
    type Err = TopicError;

    /// Accepts `random` (or `0`), a 1-based catalog position, or a catalog name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::RANDOM_LABEL) {
            return Ok(Self::Random);
        }
        if let Ok(position) = trimmed.parse::<usize>() {
            if position == 0 {
                return Ok(Self::Random);
            }
            return Topic::from_position(position)
                .map(Self::Topic)
                .ok_or_else(|| TopicError::Unknown(trimmed.to_string()));
        }
        trimmed.parse::<Topic>().map(Self::Topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirteen_distinct_names() {
        let mut names: Vec<_> = Topic::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
        assert!(!names.contains(&TopicSelector::RANDOM_LABEL));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for topic in Topic::ALL {
            assert_eq!(topic.name().parse::<Topic>().unwrap(), topic);
        }
        assert_eq!(
            "regression analysis".parse::<Topic>().unwrap(),
            Topic::RegressionAnalysis
        );
        assert!("Random".parse::<Topic>().is_err());
    }

    #[test]
    fn selector_parsing() {
        assert_eq!("random".parse::<TopicSelector>().unwrap(), TopicSelector::Random);
        assert_eq!("".parse::<TopicSelector>().unwrap(), TopicSelector::Random);
        assert_eq!(
            "5".parse::<TopicSelector>().unwrap(),
            TopicSelector::Topic(Topic::RegressionAnalysis)
        );
        assert_eq!(
            "Survival Analysis".parse::<TopicSelector>().unwrap(),
            TopicSelector::Topic(Topic::SurvivalAnalysis)
        );
        assert_eq!("0".parse::<TopicSelector>().unwrap(), TopicSelector::Random);
        assert!("14".parse::<TopicSelector>().is_err());
        assert!("Astrology".parse::<TopicSelector>().is_err());
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(Topic::from_position(1), Some(Topic::DescriptiveStatistics));
        assert_eq!(Topic::from_position(13), Some(Topic::EvaluatingConclusions));
        assert_eq!(Topic::from_position(0), None);
    }
}
