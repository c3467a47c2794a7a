use std::collections::BTreeMap;

use crate::model::Topic;

//
// ─── TALLY ────────────────────────────────────────────────────────────────────
//

/// Running counters for a single topic.
///
/// `correct <= total` holds for any tally built through [`TopicTally::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicTally {
    correct: u32,
    total: u32,
}

impl TopicTally {
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn record(&mut self, is_correct: bool) {
        self.total = self.total.saturating_add(1);
        if is_correct {
            self.correct = self.correct.saturating_add(1).min(self.total);
        }
    }
}

//
// ─── FOCUS LEVEL ──────────────────────────────────────────────────────────────
//

/// Whether a topic still needs study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusLevel {
    /// Accuracy strictly below 60%.
    NeedsFocus,
    Proficient,
}

impl FocusLevel {
    /// `correct / total < 0.60`, evaluated as `5 * correct < 3 * total` to avoid float rounding.
    #[must_use]
    pub fn classify(correct: u32, total: u32) -> Self {
        if u64::from(correct) * 5 < u64::from(total) * 3 {
            FocusLevel::NeedsFocus
        } else {
            FocusLevel::Proficient
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FocusLevel::NeedsFocus => "needs focus",
            FocusLevel::Proficient => "proficient",
        }
    }
}

//
// ─── TOPIC STATS ──────────────────────────────────────────────────────────────
//

/// Per-topic accuracy ledger for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicStats {
    tallies: BTreeMap<Topic, TopicTally>,
}

impl Default for TopicStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicStats {
    /// Every catalog topic starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tallies: Topic::ALL
                .into_iter()
                .map(|topic| (topic, TopicTally::default()))
                .collect(),
        }
    }

    pub fn record(&mut self, topic: Topic, is_correct: bool) {
        self.tallies.entry(topic).or_default().record(is_correct);
    }

    #[must_use]
    pub fn get(&self, topic: Topic) -> TopicTally {
        self.tallies.get(&topic).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Topic, TopicTally)> + '_ {
        self.tallies.iter().map(|(topic, tally)| (*topic, *tally))
    }

    #[must_use]
    pub fn report(&self) -> AccuracyReport {
        let rows = self
            .iter()
            .filter(|(_, tally)| tally.total() > 0)
            .map(|(topic, tally)| TopicAccuracy {
                topic,
                correct: tally.correct(),
                total: tally.total(),
                level: FocusLevel::classify(tally.correct(), tally.total()),
            })
            .collect();
        AccuracyReport { rows }
    }
}

//
// ─── REPORT ───────────────────────────────────────────────────────────────────
//

/// One row of the study-focus report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicAccuracy {
    pub topic: Topic,
    pub correct: u32,
    pub total: u32,
    pub level: FocusLevel,
}

impl TopicAccuracy {
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        f64::from(self.correct) / f64::from(self.total)
    }
}

/// Read-only view over attempted topics, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccuracyReport {
    rows: Vec<TopicAccuracy>,
}

impl AccuracyReport {
    #[must_use]
    pub fn rows(&self) -> &[TopicAccuracy] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn focus_topics(&self) -> impl Iterator<Item = Topic> + '_ {
        self.rows
            .iter()
            .filter(|row| row.level == FocusLevel::NeedsFocus)
            .map(|row| row.topic)
    }

    /// Totals across every attempted topic as `(correct, total)`.
    #[must_use]
    pub fn overall(&self) -> (u32, u32) {
        self.rows.iter().fold((0, 0), |(correct, total), row| {
            (correct.saturating_add(row.correct), total.saturating_add(row.total))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_for_every_topic() {
        let stats = TopicStats::new();
        assert_eq!(stats.iter().count(), Topic::ALL.len());
        assert!(stats.iter().all(|(_, t)| t == TopicTally::default()));
        assert!(stats.report().is_empty());
    }

    #[test]
    fn counts_follow_outcomes() {
        let outcomes = [true, false, true, true, false, false, true];
        let mut stats = TopicStats::new();
        for outcome in outcomes {
            stats.record(Topic::ExperimentalDesign, outcome);
            let tally = stats.get(Topic::ExperimentalDesign);
            assert!(tally.correct() <= tally.total());
        }
        let tally = stats.get(Topic::ExperimentalDesign);
        assert_eq!(tally.total(), 7);
        assert_eq!(tally.correct(), 4);
        assert_eq!(stats.get(Topic::SurvivalAnalysis).total(), 0);
    }

    #[test]
    fn sixty_percent_is_the_exclusive_boundary() {
        assert_eq!(FocusLevel::classify(5, 10), FocusLevel::NeedsFocus);
        assert_eq!(FocusLevel::classify(6, 10), FocusLevel::Proficient);
        assert_eq!(FocusLevel::classify(3, 5), FocusLevel::Proficient);
        assert_eq!(FocusLevel::classify(0, 1), FocusLevel::NeedsFocus);
        assert_eq!(FocusLevel::classify(1, 1), FocusLevel::Proficient);
    }

    #[test]
    fn report_skips_unattempted_topics() {
        let mut stats = TopicStats::new();
        stats.record(Topic::RegressionAnalysis, true);
        stats.record(Topic::ProbabilityDistributions, false);
        stats.record(Topic::ProbabilityDistributions, true);
        stats.record(Topic::ProbabilityDistributions, false);

        let report = stats.report();
        let topics: Vec<_> = report.rows().iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![Topic::ProbabilityDistributions, Topic::RegressionAnalysis]
        );
        assert_eq!(report.focus_topics().collect::<Vec<_>>(), vec![
            Topic::ProbabilityDistributions
        ]);
        assert_eq!(report.overall(), (2, 4));
        assert!((report.rows()[1].accuracy() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overall_saturates_instead_of_overflowing() {
        let row = |topic, correct| TopicAccuracy {
            topic,
            correct,
            total: u32::MAX,
            level: FocusLevel::classify(correct, u32::MAX),
        };
        let report = AccuracyReport {
            rows: vec![
                row(Topic::RegressionAnalysis, u32::MAX),
                row(Topic::SurvivalAnalysis, 1),
            ],
        };
        assert_eq!(report.overall(), (u32::MAX, u32::MAX));
    }
}
