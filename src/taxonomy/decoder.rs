//! QuestionID decoding
//!
//! A QuestionID is a fixed-position code string in one of two shapes:
//!
//! - 6-segment (full): `GSCLD-F`, e.g. `0D1N1-5` — grade, subject, chapter, level,
//!   lesson, dash, form.
//! - 5-segment (compact): `GSLD-F`, e.g. `0DN1-5` — the chapter position is
//!   structurally absent and decodes to `None`, not to an empty label.
//!
//! Decoding is two-phase: [`QuestionIdCode::parse`] checks shape and splits the
//! positions, [`decode`] additionally resolves every position against a
//! [`MapCodeTable`] snapshot. Both are pure; the same raw string against the same
//! snapshot always produces identical results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::taxonomy::mapcode::{CodeLevel, MapCodeTable};

/// Which of the two code shapes a raw string had
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeFormat {
    /// `GSCLD-F`, all six segments
    Full,
    /// `GSLD-F`, no chapter position
    Compact,
}

/// One decoded position: the single-character code and its resolved label.
/// `description = None` means the code did not resolve in the bound table, which is
/// distinct from the position being absent from the shape altogether.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub value: char,
    pub description: Option<String>,
}

impl Segment {
    fn new(value: char) -> Segment {
        Segment {
            value,
            description: None,
        }
    }
}

/// Decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The raw string matches neither code shape
    InvalidFormat { raw: String },
    /// A present position did not resolve in the table (non-fatal; only surfaced
    /// through [`QuestionIdCode::ensure_resolved`])
    UnresolvedSegment { level: CodeLevel, code: char },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidFormat { raw } => {
                write!(f, "unrecognized QuestionID shape: '{}'", raw)
            }
            DecodeError::UnresolvedSegment { level, code } => {
                write!(f, "unresolved {} code '{}'", level.name(), code)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A parsed (and possibly resolved) QuestionID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionIdCode {
    pub raw: String,
    pub format: CodeFormat,
    pub grade: Segment,
    pub subject: Segment,
    /// Absent in the compact shape
    pub chapter: Option<Segment>,
    pub level: Segment,
    pub lesson: Option<Segment>,
    pub form: Option<Segment>,
}

impl QuestionIdCode {
    /// Shape-check and split a raw code string; no table involved, all
    /// `description` fields start out `None`.
    pub fn parse(raw: &str) -> Result<QuestionIdCode, DecodeError> {
        let trimmed = raw.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        let invalid = || DecodeError::InvalidFormat {
            raw: raw.to_string(),
        };

        let shape_ok = |positions: &[char]| positions.iter().all(|c| c.is_ascii_alphanumeric());

        match (chars.len(), chars.get(5), chars.get(4)) {
            (7, Some(&'-'), _) if shape_ok(&chars[..5]) && shape_ok(&chars[6..]) => {
                Ok(QuestionIdCode {
                    raw: trimmed.to_string(),
                    format: CodeFormat::Full,
                    grade: Segment::new(chars[0]),
                    subject: Segment::new(chars[1]),
                    chapter: Some(Segment::new(chars[2])),
                    level: Segment::new(chars[3]),
                    lesson: Some(Segment::new(chars[4])),
                    form: Some(Segment::new(chars[6])),
                })
            }
            (6, _, Some(&'-')) if shape_ok(&chars[..4]) && shape_ok(&chars[5..]) => {
                Ok(QuestionIdCode {
                    raw: trimmed.to_string(),
                    format: CodeFormat::Compact,
                    grade: Segment::new(chars[0]),
                    subject: Segment::new(chars[1]),
                    chapter: None,
                    level: Segment::new(chars[2]),
                    lesson: Some(Segment::new(chars[3])),
                    form: Some(Segment::new(chars[5])),
                })
            }
            _ => Err(invalid()),
        }
    }

    /// Resolve every present position against a table snapshot.
    pub fn resolved(mut self, table: &MapCodeTable) -> QuestionIdCode {
        let fill = |segment: &mut Segment, level: CodeLevel| {
            segment.description = table.resolve(level, segment.value).map(String::from);
        };
        fill(&mut self.grade, CodeLevel::Grade);
        fill(&mut self.subject, CodeLevel::Subject);
        if let Some(chapter) = &mut self.chapter {
            fill(chapter, CodeLevel::Chapter);
        }
        fill(&mut self.level, CodeLevel::Level);
        if let Some(lesson) = &mut self.lesson {
            fill(lesson, CodeLevel::Lesson);
        }
        if let Some(form) = &mut self.form {
            fill(form, CodeLevel::Form);
        }
        self
    }

    /// Present positions in taxonomy order.
    pub fn segments(&self) -> Vec<(CodeLevel, &Segment)> {
        let mut out = vec![
            (CodeLevel::Grade, &self.grade),
            (CodeLevel::Subject, &self.subject),
        ];
        if let Some(chapter) = &self.chapter {
            out.push((CodeLevel::Chapter, chapter));
        }
        out.push((CodeLevel::Level, &self.level));
        if let Some(lesson) = &self.lesson {
            out.push((CodeLevel::Lesson, lesson));
        }
        if let Some(form) = &self.form {
            out.push((CodeLevel::Form, form));
        }
        out
    }

    /// Error on the first present position whose code did not resolve, for callers
    /// that treat a partially-labeled code as invalid.
    pub fn ensure_resolved(&self) -> Result<(), DecodeError> {
        for (level, segment) in self.segments() {
            if segment.description.is_none() {
                return Err(DecodeError::UnresolvedSegment {
                    level,
                    code: segment.value,
                });
            }
        }
        Ok(())
    }

    /// Human-readable rendering; unresolved positions fall back to their raw code
    /// in brackets.
    pub fn describe(&self) -> String {
        self.segments()
            .iter()
            .map(|(_, segment)| match &segment.description {
                Some(label) => label.clone(),
                None => format!("[{}]", segment.value),
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Decode a raw QuestionID against a table snapshot: shape check, position split,
/// label resolution. Unknown codes leave `description = None` without failing.
pub fn decode(raw: &str, table: &MapCodeTable) -> Result<QuestionIdCode, DecodeError> {
    Ok(QuestionIdCode::parse(raw)?.resolved(table))
}
