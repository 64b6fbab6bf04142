//! MapCode taxonomy tables and QuestionID decoding
//!
//! A QuestionID is a fixed-position character code placing a question in the
//! curriculum taxonomy (grade, subject, chapter, difficulty level, lesson, form).
//! Decoding resolves each position against a versioned, immutable [`MapCodeTable`]
//! snapshot; reloading a table produces a new snapshot, never an in-place mutation,
//! so concurrent decodes are race-free by construction.

pub mod decoder;
pub mod mapcode;

pub use decoder::{decode, CodeFormat, DecodeError, QuestionIdCode, Segment};
pub use mapcode::{CodeLevel, MapCodeTable};
