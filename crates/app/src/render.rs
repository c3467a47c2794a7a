//! Plain-text rendering of session state for the terminal.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use services::SubmitOutcome;
use study_core::model::{AccuracyReport, AnswerAttempt, FocusLevel, Question, Topic, TopicSelector};

pub const HELP: &str = "\
Commands:
  topics                  list topics
  topic <sel>             choose topic (random, number or name)
  generate [sel]          new question (alias: g)
  select <A-D>            move the answer selector (alias: s)
  submit [A-D]            submit answer; a bare letter also submits
  explain                 explain the selected answer (alias: e)
  show                    show the current question
  stats                   study focus by topic
  history                 answers so far
  help                    this text
  quit                    leave";

#[must_use]
pub fn topic_list(current: TopicSelector) -> String {
    let mut out = String::new();
    let marker = |selected: bool| if selected { '*' } else { ' ' };
    let _ = writeln!(
        out,
        "{}  0. {}",
        marker(current == TopicSelector::Random),
        TopicSelector::RANDOM_LABEL
    );
    for (index, topic) in Topic::ALL.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:>2}. {}",
            marker(current == TopicSelector::Topic(topic)),
            index + 1,
            topic
        );
    }
    out
}

#[must_use]
pub fn question(question: &Question) -> String {
    format!("[{}]\n\n{}\n", question.topic(), question.body())
}

#[must_use]
pub fn submit_outcome(outcome: &SubmitOutcome) -> String {
    let mut out = format!("Your answer was: {}\n", outcome.attempt.selected);
    if outcome.is_correct() {
        out.push_str("Correct!");
    } else {
        let key = outcome
            .correct_answer
            .map_or_else(|| "unknown".to_string(), |label| label.to_string());
        let _ = write!(out, "Incorrect! Correct answer: {key}");
    }
    out
}

#[must_use]
pub fn percent(correct: u32, total: u32) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", f64::from(correct) * 100.0 / f64::from(total))
}

#[must_use]
pub fn focus_report(report: &AccuracyReport) -> String {
    if report.is_empty() {
        return "No answers yet.".to_string();
    }
    let mut out = String::from("Your study focus:\n");
    for row in report.rows() {
        let marker = match row.level {
            FocusLevel::NeedsFocus => '!',
            FocusLevel::Proficient => ' ',
        };
        let _ = writeln!(
            out,
            "{marker} {}: {} accuracy ({}/{}, {})",
            row.topic,
            percent(row.correct, row.total),
            row.correct,
            row.total,
            row.level.label()
        );
    }
    let focus: Vec<String> = report.focus_topics().map(|topic| topic.to_string()).collect();
    if !focus.is_empty() {
        let _ = writeln!(out, "Focus next on: {}", focus.join(", "));
    }
    let (correct, total) = report.overall();
    let _ = write!(out, "Overall: {} ({correct}/{total})", percent(correct, total));
    out
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S").to_string()
}

#[must_use]
pub fn history(log: &[AnswerAttempt]) -> String {
    if log.is_empty() {
        return "No answers yet.".to_string();
    }
    let mut out = String::new();
    for (index, attempt) in log.iter().enumerate() {
        let first_line = attempt.question.lines().next().unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}. {} [{}] {} -> {}: {}",
            index + 1,
            timestamp(attempt.answered_at),
            attempt.topic,
            attempt.selected,
            if attempt.correct { "correct" } else { "incorrect" },
            first_line
        );
    }
    out.truncate(out.trim_end().len());
    out
}
