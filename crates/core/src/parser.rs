//! Splits generated question text into a body and an answer key.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{AnswerLabel, ParsedQuestion};

// Uppercase letters may sit mid-line (`Answer: C**`); a lowercase letter only
// counts when it ends its line, so prose like `Answer: a sample mean` is left alone.
static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)Answer:\s*(?:([A-D])\b|([a-d])[ \t]*$)")
        .expect("answer marker pattern should compile")
});

fn first_answer(text: &str) -> Option<AnswerLabel> {
    let caps = ANSWER_MARKER.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|letter| letter.as_str().parse::<AnswerLabel>().ok())
}

/// Parse generated text of the form `"<question and options>\nAnswer: X"`.
///
/// The first `Answer: X` marker supplies the answer key. Markers are removed
/// from the body until none is left, and the remainder is trimmed. Text without
/// a marker yields [`ParsedQuestion::Unparsed`] with the trimmed input as body.
/// Never fails.
#[must_use]
pub fn parse_question(raw: &str) -> ParsedQuestion {
    let trimmed = raw.trim();
    let Some(answer) = first_answer(trimmed) else {
        return ParsedQuestion::Unparsed {
            body: trimmed.to_string(),
        };
    };

    // A removal can splice neighbouring text into a fresh marker.
    let mut body = trimmed.to_string();
    while ANSWER_MARKER.is_match(&body) {
        body = ANSWER_MARKER.replace_all(&body, "").trim().to_string();
    }
    ParsedQuestion::Parsed { body, answer }
}
