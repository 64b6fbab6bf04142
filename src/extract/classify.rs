//! Question-type classification
//!
//! The classifier scans a block body (metadata region included, solution excluded)
//! for the first answer-list macro family. Finding none is not a detection gap: a
//! question without a structured answer list is an essay question by design.

use std::ops::Range;

use crate::extract::delimiter::{comment_spans, in_spans};
use crate::extract::patterns;
use crate::extract::question::QuestionType;

/// Classifier result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub question_type: QuestionType,
    /// Span of the answer-list macro token in the scanned body, absent for essays
    pub marker: Option<Range<usize>>,
}

/// Classify a block body by its first answer-list macro.
///
/// The earliest match by source position wins; ties between families at the same
/// offset (malformed input) fall back to pattern-library order. Macros inside
/// comments are ignored.
pub fn classify_body(body: &str) -> Classification {
    let comments = comment_spans(body);
    let mut found: Option<(usize, Range<usize>, QuestionType)> = None;

    for (question_type, pattern) in patterns::answer_list_patterns() {
        let candidate = pattern
            .find_iter(body)
            .find(|m| !in_spans(&comments, m.start()));
        if let Some(m) = candidate {
            let better = match &found {
                Some((start, _, _)) => m.start() < *start,
                None => true,
            };
            if better {
                found = Some((m.start(), m.range(), question_type));
            }
        }
    }

    match found {
        Some((_, range, question_type)) => Classification {
            question_type,
            marker: Some(range),
        },
        None => Classification {
            question_type: QuestionType::Essay,
            marker: None,
        },
    }
}
