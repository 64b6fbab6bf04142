//! Versioned MapCode lookup tables
//!
//! Six independent flat `code → label` mappings, one per taxonomy level, loaded from
//! a generated configuration source (YAML or JSON). A table is a read-only snapshot:
//! share it as-is (or behind an `Arc`) and build a fresh one on reload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The six taxonomy levels of a QuestionID code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeLevel {
    Grade,
    Subject,
    Chapter,
    Level,
    Lesson,
    Form,
}

impl CodeLevel {
    /// Display name used in error messages and rendered taxonomy text
    pub fn name(&self) -> &'static str {
        match self {
            CodeLevel::Grade => "grade",
            CodeLevel::Subject => "subject",
            CodeLevel::Chapter => "chapter",
            CodeLevel::Level => "level",
            CodeLevel::Lesson => "lesson",
            CodeLevel::Form => "form",
        }
    }
}

/// Immutable snapshot of the six code→label mappings for one table version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCodeTable {
    pub version: String,
    pub grades: BTreeMap<char, String>,
    pub subjects: BTreeMap<char, String>,
    pub chapters: BTreeMap<char, String>,
    pub levels: BTreeMap<char, String>,
    pub lessons: BTreeMap<char, String>,
    pub forms: BTreeMap<char, String>,
}

impl MapCodeTable {
    /// An empty table for the given version; every lookup resolves to `None`.
    pub fn empty(version: &str) -> MapCodeTable {
        MapCodeTable {
            version: version.to_string(),
            ..MapCodeTable::default()
        }
    }

    /// Load a snapshot from generated YAML configuration text.
    pub fn from_yaml(text: &str) -> Result<MapCodeTable, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Load a snapshot from generated JSON configuration text.
    pub fn from_json(text: &str) -> Result<MapCodeTable, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolve one code at one level. Unknown codes resolve to `None`; whether that
    /// invalidates the whole QuestionID is the caller's decision.
    pub fn resolve(&self, level: CodeLevel, code: char) -> Option<&str> {
        let mapping = match level {
            CodeLevel::Grade => &self.grades,
            CodeLevel::Subject => &self.subjects,
            CodeLevel::Chapter => &self.chapters,
            CodeLevel::Level => &self.levels,
            CodeLevel::Lesson => &self.lessons,
            CodeLevel::Form => &self.forms,
        };
        mapping.get(&code).map(String::as_str)
    }
}
