//! Testing utilities
//!
//! Tests should build their documents through [`QuestionDoc`] instead of scattering
//! hand-typed `\begin{ex}`/`\end{ex}` scaffolding across test files: when the
//! recognized notation set evolves, the fixtures evolve in one place.
//!
//! [`sample_table`] is the verified MapCode snapshot used across tests; it covers
//! every code appearing in the fixture documents.

use crate::taxonomy::MapCodeTable;

/// Builder assembling a LaTeX exam document block by block
#[derive(Debug, Clone, Default)]
pub struct QuestionDoc {
    source: String,
}

impl QuestionDoc {
    pub fn new() -> QuestionDoc {
        QuestionDoc::default()
    }

    /// Append one `\begin{ex}...\end{ex}` block.
    pub fn block(self, body: &str) -> QuestionDoc {
        self.named_block("ex", body)
    }

    /// Append a block in the given environment (`ex` or `bt`).
    pub fn named_block(mut self, env: &str, body: &str) -> QuestionDoc {
        self.source
            .push_str(&format!("\\begin{{{}}}\n{}\n\\end{{{}}}\n\n", env, body, env));
        self
    }

    /// Append arbitrary text between blocks (preamble, prose, comments).
    pub fn raw(mut self, text: &str) -> QuestionDoc {
        self.source.push_str(text);
        self
    }

    pub fn build(self) -> String {
        self.source
    }
}

const SAMPLE_TABLE_YAML: &str = r#"
version: "2024.1"
grades:
  "0": "Lớp 10"
  "1": "Lớp 11"
  "2": "Lớp 12"
subjects:
  D: "Đại số"
  H: "Hình học"
chapters:
  "1": "Mệnh đề và tập hợp"
  "2": "Hàm số"
levels:
  N: "Nhận biết"
  T: "Thông hiểu"
  V: "Vận dụng"
lessons:
  "1": "Mệnh đề"
  "2": "Tập hợp"
forms:
  "5": "Trắc nghiệm"
  "0": "Tự luận"
"#;

/// The verified MapCode table snapshot used across tests.
pub fn sample_table() -> MapCodeTable {
    MapCodeTable::from_yaml(SAMPLE_TABLE_YAML).expect("sample table YAML is verified")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_doc_builder() {
        let doc = QuestionDoc::new()
            .raw("% preamble\n")
            .block("Stem one.")
            .named_block("bt", "Stem two.")
            .build();
        assert!(doc.starts_with("% preamble\n\\begin{ex}\n"));
        assert!(doc.contains("\\begin{bt}\nStem two.\n\\end{bt}"));
    }

    #[test]
    fn test_sample_table_loads() {
        let table = sample_table();
        assert_eq!(table.version, "2024.1");
    }
}
