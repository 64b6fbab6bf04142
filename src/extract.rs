//! Extraction pipeline for LaTeX exam questions
//!
//! This module contains the whole per-document pipeline: the delimiter matcher, the
//! pattern library of recognized macros/environments, the per-block extraction passes
//! (metadata, classification, answers, solution), and the assembler that drives them
//! over a full document.
//!
//! The pipeline is computation-only: it performs no I/O and keeps no state between
//! calls, so independent documents can be processed concurrently without locking.

pub mod answers;
pub mod assembler;
pub mod classify;
pub mod delimiter;
pub mod metadata;
pub mod patterns;
pub mod question;
pub mod solution;

pub use answers::{extract_answers, ExtractionError};
pub use assembler::{extract_questions, BlockFailure, Extraction, Extractor, QuestionBlocks};
pub use classify::{classify_body, Classification};
pub use delimiter::{match_braces, match_environment, EnvEnd, MatchError};
pub use metadata::{extract_metadata, Metadata};
pub use patterns::Construct;
pub use question::{Answer, CorrectAnswer, ExtractedQuestion, QuestionType, Subcount};
pub use solution::extract_solution;
