//! Metadata extraction from a question block's header region
//!
//! The header region is the text preceding the first answer-list macro. It may carry
//! a source citation, a QuestionID comment, and a Subcount identifier, each
//! independently optional; nothing here is ever an error.

use std::ops::Range;

use crate::extract::patterns;
use crate::extract::question::Subcount;

/// Everything found in a block's header region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub source: Option<String>,
    /// Raw QuestionID code text; decoding happens in the taxonomy layer
    pub question_id_raw: Option<String>,
    pub subcount: Option<Subcount>,
    /// Header-relative spans of the matched notations, for stem stripping
    pub spans: Vec<Range<usize>>,
}

/// Scan the header region for source citation, QuestionID and Subcount.
///
/// All three Subcount notations run against the full header; the first notation in
/// pattern-library precedence order that matches wins, regardless of where in the
/// header the looser notations appear. At most one Subcount is kept per block.
pub fn extract_metadata(header: &str) -> Metadata {
    let mut meta = Metadata::default();

    if let Some(caps) = patterns::SOURCE_COMMENT.captures(header) {
        meta.source = Some(caps[1].trim().to_string());
        meta.spans.push(caps.get(0).unwrap().range());
    }

    if let Some(caps) = patterns::QUESTION_ID_COMMENT.captures(header) {
        meta.question_id_raw = Some(caps[1].to_string());
        meta.spans.push(caps.get(0).unwrap().range());
    }

    for (_, pattern) in patterns::subcount_patterns() {
        if let Some(caps) = pattern.captures(header) {
            meta.subcount = Some(Subcount::new(&caps[1], &caps[2]));
            meta.spans.push(caps.get(0).unwrap().range());
            break;
        }
    }

    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_absent() {
        let meta = extract_metadata("Just a stem with no metadata at all.");
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn test_full_header() {
        let meta = extract_metadata("%[Nguồn: Đề thi thử 2024]\n%[0D1N1-5]\n%[TL.100022]\n");
        assert_eq!(meta.source.as_deref(), Some("Đề thi thử 2024"));
        assert_eq!(meta.question_id_raw.as_deref(), Some("0D1N1-5"));
        assert_eq!(meta.subcount, Some(Subcount::new("TL", "100022")));
        assert_eq!(meta.spans.len(), 3);
    }

    #[test]
    fn test_subcount_precedence_is_by_notation_not_position() {
        // The loose Subcnt form appears first in the text, but the bracket-comment
        // notation still wins
        let meta = extract_metadata("Subcnt: XX.1\n%[TL.100022]\n");
        assert_eq!(meta.subcount, Some(Subcount::new("TL", "100022")));
    }

    #[test]
    fn test_subcount_fallback_notations() {
        let meta = extract_metadata("%Subcount: EX.7\n");
        assert_eq!(meta.subcount, Some(Subcount::new("EX", "7")));
        let meta = extract_metadata("stem Subcnt: TL.42 more stem");
        assert_eq!(meta.subcount, Some(Subcount::new("TL", "42")));
    }

    #[test]
    fn test_question_id_and_subcount_brackets_do_not_cross_match() {
        let meta = extract_metadata("%[TL.100022]\n");
        assert_eq!(meta.question_id_raw, None);
        assert_eq!(meta.subcount, Some(Subcount::new("TL", "100022")));
    }
}
