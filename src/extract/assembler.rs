//! Question assembly over a full document
//!
//! The assembler repeatedly locates the next question environment, slices out the
//! block, and runs the per-block passes (metadata, classification, answers,
//! solution) to build one [`ExtractedQuestion`]. Failures are block-scoped: a
//! malformed block yields one [`BlockFailure`] and scanning resumes, so a caller can
//! report "N of M questions imported" instead of an all-or-nothing outcome.
//!
//! Scanning is lazy and restartable. [`Extractor::blocks`] hands out a fresh
//! iterator over the same document each time; no cursor state leaks between calls.

use std::fmt;
use std::ops::Range;

use crate::extract::answers::{extract_answers, AnswerList, ExtractionError};
use crate::extract::classify::classify_body;
use crate::extract::delimiter::{comment_spans, in_spans, match_environment};
use crate::extract::metadata::extract_metadata;
use crate::extract::patterns;
use crate::extract::question::{CorrectAnswer, ExtractedQuestion};
use crate::extract::solution::extract_solution;
use crate::taxonomy::{MapCodeTable, QuestionIdCode};

/// One block-scoped failure: where the block started and why it was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFailure {
    /// Offset of the block's `\begin{...}` token in the source document
    pub offset: usize,
    pub error: ExtractionError,
}

impl fmt::Display for BlockFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block at offset {}: {}", self.offset, self.error)
    }
}

/// The outcome of scanning one document: successes and failures side by side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub questions: Vec<ExtractedQuestion>,
    pub failures: Vec<BlockFailure>,
}

impl Extraction {
    /// Whether every block in the document extracted cleanly
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of question blocks found, failed ones included
    pub fn total_blocks(&self) -> usize {
        self.questions.len() + self.failures.len()
    }
}

/// Extraction front end, optionally bound to a MapCode table snapshot.
///
/// Without a table, `question_id` fields carry parsed positions with no labels;
/// with one, every position is resolved against that snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor<'t> {
    table: Option<&'t MapCodeTable>,
}

impl<'t> Extractor<'t> {
    pub fn new() -> Extractor<'t> {
        Extractor { table: None }
    }

    pub fn with_table(table: &'t MapCodeTable) -> Extractor<'t> {
        Extractor { table: Some(table) }
    }

    /// Scan the whole document eagerly.
    pub fn extract(&self, document: &str) -> Extraction {
        let mut extraction = Extraction::default();
        for outcome in self.blocks(document) {
            match outcome {
                Ok(question) => extraction.questions.push(question),
                Err(failure) => extraction.failures.push(failure),
            }
        }
        extraction
    }

    /// Lazy iterator over the document's question blocks. Each call starts a fresh,
    /// deterministic scan of the same text.
    pub fn blocks<'d>(&self, document: &'d str) -> QuestionBlocks<'d, 't> {
        QuestionBlocks {
            document,
            comments: comment_spans(document),
            cursor: 0,
            table: self.table,
        }
    }
}

/// Convenience entry point: extract without a MapCode table.
pub fn extract_questions(document: &str) -> Extraction {
    Extractor::new().extract(document)
}

/// Lazy block scanner; see [`Extractor::blocks`]
pub struct QuestionBlocks<'d, 't> {
    document: &'d str,
    comments: Vec<Range<usize>>,
    cursor: usize,
    table: Option<&'t MapCodeTable>,
}

impl<'d, 't> QuestionBlocks<'d, 't> {
    /// First question-environment begin token at or after `from`, comments skipped.
    fn next_begin(&self, from: usize) -> Option<(usize, usize, &'d str)> {
        let mut search = from;
        while search <= self.document.len() {
            let caps = patterns::QUESTION_ENV_BEGIN.captures(&self.document[search..])?;
            let whole = caps.get(0).unwrap();
            let start = search + whole.start();
            if in_spans(&self.comments, start) {
                search += whole.end();
                continue;
            }
            let name = caps.get(1).unwrap().as_str();
            return Some((start, search + whole.end(), name));
        }
        None
    }
}

impl<'d, 't> Iterator for QuestionBlocks<'d, 't> {
    type Item = Result<ExtractedQuestion, BlockFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let (begin_start, body_start, name) = self.next_begin(self.cursor)?;

        match match_environment(self.document, name, body_start) {
            Ok(env) => {
                self.cursor = env.after_end;
                let span = begin_start..env.after_end;
                let body = &self.document[body_start..env.body_end];
                Some(
                    extract_block(self.document, span, body, self.table).map_err(|error| {
                        BlockFailure {
                            offset: begin_start,
                            error,
                        }
                    }),
                )
            }
            Err(err) => {
                // Bounded skip: resume at the next begin token (or end of document)
                // rather than guessing where the unterminated block was meant to end
                self.cursor = self
                    .next_begin(body_start)
                    .map(|(start, _, _)| start)
                    .unwrap_or(self.document.len());
                Some(Err(BlockFailure {
                    offset: begin_start,
                    error: err.into(),
                }))
            }
        }
    }
}

/// Run the per-block passes and assemble one record.
fn extract_block(
    document: &str,
    span: Range<usize>,
    body: &str,
    table: Option<&MapCodeTable>,
) -> Result<ExtractedQuestion, ExtractionError> {
    let solution = extract_solution(body)?;
    let scan_end = solution.as_ref().map(|s| s.span.start).unwrap_or(body.len());

    let classification = classify_body(&body[..scan_end]);
    let header_end = classification
        .marker
        .as_ref()
        .map(|m| m.start)
        .unwrap_or(scan_end);
    let metadata = extract_metadata(&body[..header_end]);

    let answer_list = match &classification.marker {
        Some(marker) => extract_answers(&body[..scan_end], marker, classification.question_type)?,
        None => AnswerList {
            answers: Vec::new(),
            end: 0,
        },
    };

    let mut removals: Vec<Range<usize>> = metadata.spans.clone();
    if let Some(marker) = &classification.marker {
        removals.push(marker.start..answer_list.end);
    }
    if let Some(sol) = &solution {
        removals.push(sol.span.clone());
    }
    removals.sort_by_key(|r| r.start);

    let content = strip_spans(body, &removals);
    if content.is_empty() {
        return Err(ExtractionError::EmptyStem);
    }

    // A malformed QuestionID comment leaves the field empty without failing the block
    let question_id = metadata
        .question_id_raw
        .as_deref()
        .and_then(|raw| QuestionIdCode::parse(raw).ok())
        .map(|code| match table {
            Some(table) => code.resolved(table),
            None => code,
        });

    let answers = answer_list.answers;
    let correct_answer = CorrectAnswer::from_answers(&answers);

    Ok(ExtractedQuestion {
        raw_content: document[span.clone()].to_string(),
        span,
        question_type: classification.question_type,
        content,
        answers,
        correct_answer,
        solution: solution.map(|s| s.content),
        source: metadata.source,
        subcount: metadata.subcount,
        question_id,
    })
}

/// Concatenate the text between the removal spans, trimmed. Spans must be sorted
/// by start; overlaps are tolerated (the later span's covered part is dropped).
fn strip_spans(body: &str, removals: &[Range<usize>]) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for range in removals {
        if range.start > pos {
            out.push_str(&body[pos..range.start]);
        }
        pos = pos.max(range.end);
    }
    out.push_str(&body[pos..]);
    out.trim().to_string()
}
