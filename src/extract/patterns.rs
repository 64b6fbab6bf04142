//! Pattern library for the recognized question-authoring constructs
//!
//! Every macro/environment the extraction pipeline understands is declared here as a
//! tagged [`Construct`] with its regex candidates, instead of precedence living
//! implicitly in scattered regexes. Order matters wherever a table is exposed:
//! candidates are tried in declaration order, more structured notations first.
//!
//! No pattern matching is an error at this layer. A construct that does not match
//! simply means the corresponding field is absent; most per-question metadata is
//! optional.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::question::QuestionType;

/// The recognized constructs, one variant per notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// `\begin{ex}` / `\begin{bt}` question environments
    QuestionEnv,
    /// `%[Nguồn: ...]` source-citation comment
    SourceComment,
    /// `%[0D1N1-5]` QuestionID comment
    QuestionIdComment,
    /// `%[TL.100022]` bracket-comment Subcount (most structured notation)
    SubcountBracket,
    /// `%Subcount: TL.100022` comment-keyword Subcount
    SubcountComment,
    /// `Subcnt: TL.100022` free-text Subcount (loosest notation)
    SubcountInline,
    /// `\choice` multiple-choice answer list
    ChoiceList,
    /// `\choiceTF` / `\choiceTFt` true-false answer list
    ChoiceTfList,
    /// `\shortans` short-answer macro
    ShortAnswerList,
    /// `\matching` matching-pairs answer list
    MatchingList,
    /// `\loigiai{...}` worked-solution macro
    Solution,
}

/// Opening token of a question environment; group 1 is the environment name.
pub static QUESTION_ENV_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\s*\{\s*(ex|bt)\s*\}").unwrap());

/// Source citation; group 1 is the citation text (trimmed by the caller).
pub static SOURCE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\s*\[\s*Nguồn\s*:\s*([^\]\n]*)\]").unwrap());

/// QuestionID comment; group 1 is the raw code in either the 5- or 6-segment shape.
/// Shape validation proper lives in the decoder; this only has to not collide with
/// the Subcount bracket notation (which always carries a dot).
pub static QUESTION_ID_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\s*\[\s*([0-9][A-Z0-9]{3,4}-[0-9A-Z])\s*\]").unwrap());

/// Bracket-comment Subcount; groups 1 and 2 are prefix and number.
pub static SUBCOUNT_BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\s*\[\s*([A-Za-z]+)\.([0-9]+)\s*\]").unwrap());

/// Comment-keyword Subcount; groups 1 and 2 are prefix and number.
pub static SUBCOUNT_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%\s*Subcount\s*:\s*([A-Za-z]+)\.?\s*([0-9]+)").unwrap());

/// Free-text Subcount; groups 1 and 2 are prefix and number.
pub static SUBCOUNT_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Subcnt\s*:\s*([A-Za-z]+)\.?\s*([0-9]+)").unwrap());

static CHOICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\choice\b").unwrap());
static CHOICE_TF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\choiceTFt?\b").unwrap());
static SHORTANS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\shortans\b").unwrap());
static MATCHING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\matching\b").unwrap());

/// Solution macro up to and including its opening brace.
pub static SOLUTION_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\loigiai\s*\{").unwrap());

/// Subcount notations in precedence order. Order matters: the first notation that
/// matches anywhere in the header wins, regardless of source position.
pub fn subcount_patterns() -> [(Construct, &'static Regex); 3] {
    [
        (Construct::SubcountBracket, &SUBCOUNT_BRACKET),
        (Construct::SubcountComment, &SUBCOUNT_COMMENT),
        (Construct::SubcountInline, &SUBCOUNT_INLINE),
    ]
}

/// Answer-list macro families with the question type each one implies.
///
/// The classifier picks the match earliest in the source text; this table's order
/// only breaks ties between families matching at the same offset (which well-formed
/// input never produces). The TF pattern is listed before the plain choice pattern
/// so the more specific macro name takes the tie.
pub fn answer_list_patterns() -> [(QuestionType, &'static Regex); 4] {
    [
        (QuestionType::TrueFalse, &CHOICE_TF),
        (QuestionType::MultipleChoice, &CHOICE),
        (QuestionType::ShortAnswer, &SHORTANS),
        (QuestionType::Matching, &MATCHING),
    ]
}
