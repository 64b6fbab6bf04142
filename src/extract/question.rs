//! Output data model of the extraction pipeline
//!
//! One [`ExtractedQuestion`] per question block. Absent fields are `Option::None`,
//! never sentinel empty strings; the raw source span is preserved for audit and
//! round-trip checks.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::taxonomy::QuestionIdCode;

/// Question type, assigned by the body classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// `\choice` list, one marked answer expected
    MultipleChoice,
    /// `\choiceTF` list, each item independently true or false
    TrueFalse,
    /// `\shortans`, a single expected answer string
    ShortAnswer,
    /// `\matching`, ordered pair items
    Matching,
    /// No answer-list macro at all; a free-form answer is expected
    Essay,
    /// Not classified
    Unknown,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Unknown
    }
}

impl QuestionType {
    /// Whether this type carries a structured answer list
    pub fn has_answer_list(&self) -> bool {
        !matches!(self, QuestionType::Essay | QuestionType::Unknown)
    }
}

/// One answer item with its correctness marker already stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub content: String,
    pub is_correct: bool,
}

/// Derived view over the marked-correct answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl CorrectAnswer {
    /// Derive the view from an answer list: none marked yields `None`, one marked
    /// yields `Single`, several yield `Multiple` in list order.
    pub fn from_answers(answers: &[Answer]) -> Option<CorrectAnswer> {
        let mut marked: Vec<&Answer> = answers.iter().filter(|a| a.is_correct).collect();
        match marked.len() {
            0 => None,
            1 => Some(CorrectAnswer::Single(marked.remove(0).content.clone())),
            _ => Some(CorrectAnswer::Multiple(
                marked.into_iter().map(|a| a.content.clone()).collect(),
            )),
        }
    }
}

/// Secondary human-assigned identifier tying a question to its originating paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcount {
    pub prefix: String,
    pub number: String,
    /// Normalized `PREFIX.NUMBER` form
    pub full_id: String,
}

impl Subcount {
    pub fn new(prefix: &str, number: &str) -> Subcount {
        Subcount {
            prefix: prefix.to_string(),
            number: number.to_string(),
            full_id: format!("{}.{}", prefix, number),
        }
    }
}

/// One structured question record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedQuestion {
    /// Original LaTeX span of the whole block, preserved for audit/round-trip
    pub raw_content: String,
    /// Byte offsets of `raw_content` in the source document
    pub span: Range<usize>,
    pub question_type: QuestionType,
    /// Question stem with metadata comments, answer list and solution stripped
    pub content: String,
    /// Ordered answer list; empty for essay questions
    pub answers: Vec<Answer>,
    /// Derived correct-answer view for types with correctness markers
    pub correct_answer: Option<CorrectAnswer>,
    /// Worked solution, verbatim including nested LaTeX
    pub solution: Option<String>,
    /// Source citation (exam name/year)
    pub source: Option<String>,
    pub subcount: Option<Subcount>,
    /// Raw and (when a table was bound) decoded taxonomy
    pub question_id: Option<QuestionIdCode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(content: &str, is_correct: bool) -> Answer {
        Answer {
            content: content.to_string(),
            is_correct,
        }
    }

    #[test]
    fn test_correct_answer_derivation() {
        assert_eq!(
            CorrectAnswer::from_answers(&[answer("a", false), answer("b", false)]),
            None
        );
        assert_eq!(
            CorrectAnswer::from_answers(&[answer("a", false), answer("b", true)]),
            Some(CorrectAnswer::Single("b".to_string()))
        );
        assert_eq!(
            CorrectAnswer::from_answers(&[answer("a", true), answer("b", true)]),
            Some(CorrectAnswer::Multiple(vec![
                "a".to_string(),
                "b".to_string()
            ]))
        );
    }

    #[test]
    fn test_subcount_full_id() {
        assert_eq!(Subcount::new("TL", "100022").full_id, "TL.100022");
    }
}
