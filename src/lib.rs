//! # exparse
//!
//! Extraction and classification engine for LaTeX exam questions.
//!
//! The crate ingests hand-authored LaTeX source containing exam questions wrapped in
//! the question environments (`\begin{ex}`, `\begin{bt}`) and produces one structured
//! record per question: stem, typed answer list with correctness markers, worked
//! solution, source citation, Subcount identifier, and the decoded QuestionID
//! taxonomy.
//!
//! The two halves of the crate:
//!
//! - [`extract`] — the per-document extraction pipeline (delimiter matching, pattern
//!   library, metadata/classifier/answer/solution passes, question assembler).
//! - [`taxonomy`] — the MapCode lookup table and the QuestionID decoder that resolve
//!   a fixed-position code string into human-readable curriculum labels.
//!
//! Failures are block-scoped: one malformed question never aborts extraction of the
//! rest of the document. See [`extract::Extraction`] for the success/failure split.
//!
//! ## Testing
//!
//! Tests build their documents through the [testing module](testing) fixture builder
//! rather than scattering LaTeX literals across test files.

pub mod extract;
pub mod taxonomy;
pub mod testing;

pub use extract::{
    extract_questions, Answer, BlockFailure, CorrectAnswer, ExtractedQuestion, Extraction,
    ExtractionError, Extractor, MatchError, QuestionType, Subcount,
};
pub use taxonomy::{decode, CodeFormat, CodeLevel, DecodeError, MapCodeTable, QuestionIdCode};
