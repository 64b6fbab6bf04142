//! Answer extraction per question type
//!
//! Once a block is classified, the answer items are the brace-delimited groups that
//! follow the answer-list macro. A `*` as the first non-blank character inside an
//! item's braces marks it correct and is stripped from the stored content.
//!
//! The extractor records what it finds; it never enforces per-type cardinality
//! rules (a multiple-choice list with two marked answers is carried as-is and left
//! to caller policy).

use std::fmt;
use std::ops::Range;

use crate::extract::delimiter::{match_braces, MatchError};
use crate::extract::question::{Answer, QuestionType};

/// Leading marker character denoting a correct answer item
pub const CORRECT_MARKER: char = '*';

/// Block-scoped extraction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The classified type requires an answer list but no items were found
    MissingAnswerList { question_type: QuestionType },
    /// The block has no question stem left once macros are stripped
    EmptyStem,
    /// A brace group or environment never closes
    Unbalanced(MatchError),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::MissingAnswerList { question_type } => {
                write!(f, "no answer items found for {:?} question", question_type)
            }
            ExtractionError::EmptyStem => write!(f, "question block has an empty stem"),
            ExtractionError::Unbalanced(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ExtractionError {}

impl From<MatchError> for ExtractionError {
    fn from(err: MatchError) -> Self {
        ExtractionError::Unbalanced(err)
    }
}

/// Extracted answer items plus where the list ends in the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerList {
    pub answers: Vec<Answer>,
    /// Body-relative offset just past the last consumed token
    pub end: usize,
}

/// Extract the answer list that starts at the classifier's `marker` span.
///
/// - MC/TF/MA: every following brace group becomes one item, marker detected per
///   item. Multiple marked items are legal (TF always, MC by caller policy).
/// - SA: the single expected answer, stored as one item with `is_correct = true`.
/// - Essay/Unknown: empty list, nothing consumed.
pub fn extract_answers(
    body: &str,
    marker: &Range<usize>,
    question_type: QuestionType,
) -> Result<AnswerList, ExtractionError> {
    if !question_type.has_answer_list() {
        return Ok(AnswerList {
            answers: Vec::new(),
            end: marker.end,
        });
    }

    let mut pos = skip_option_group(body, skip_trivia(body, marker.end));
    let mut answers = Vec::new();

    loop {
        // Look ahead past trivia without consuming it into the reported end
        let next = skip_trivia(body, pos);
        if !body[next..].starts_with('{') {
            break;
        }
        let open = next + 1;
        let close = match_braces(body, open)?;
        answers.push(parse_item(&body[open..close]));
        pos = close + 1;

        // The short-answer macro takes exactly one argument
        if question_type == QuestionType::ShortAnswer {
            break;
        }
    }

    if answers.is_empty() {
        return Err(ExtractionError::MissingAnswerList { question_type });
    }

    if question_type == QuestionType::ShortAnswer {
        // The expected answer is correct by definition, marker or not
        for answer in &mut answers {
            answer.is_correct = true;
        }
    }

    Ok(AnswerList { answers, end: pos })
}

/// Split one item into content and correctness marker.
fn parse_item(raw: &str) -> Answer {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(CORRECT_MARKER) {
        Some(rest) => Answer {
            content: rest.trim_start().to_string(),
            is_correct: true,
        },
        None => Answer {
            content: trimmed.to_string(),
            is_correct: false,
        },
    }
}

/// Skip whitespace and line comments between answer items.
fn skip_trivia(body: &str, mut pos: usize) -> usize {
    let bytes = body.as_bytes();
    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b'%' {
            while pos < bytes.len() && bytes[pos] != b'\n' {
                pos += 1;
            }
            continue;
        }
        return pos;
    }
}

/// Skip a `[...]` option group (e.g. `\shortans[oly]{...}`), if present.
fn skip_option_group(body: &str, pos: usize) -> usize {
    if body[pos..].starts_with('[') {
        match body[pos..].find(']') {
            Some(close) => pos + close + 1,
            None => pos,
        }
    } else {
        pos
    }
}
