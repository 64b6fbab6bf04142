//! Delimiter matching for brace groups and question environments
//!
//! Foundation for every extraction step: given the offset just past an opening
//! construct, find the matching closing token. Nested same-kind delimiters balance;
//! delimiters inside inert spans never count. Inert spans are escaped characters
//! (`\{`, `\}`, `\%`, `\\`) and line comments (`%` to end of line).
//!
//! The scan is tokenized with a logos lexer rather than walked byte by byte so the
//! inert-span rules live in one token table instead of being re-derived at each
//! call site.

use logos::Logos;
use std::fmt;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens for the delimiter scan
///
/// The token set is deliberately coarse: everything that cannot affect brace
/// balance collapses into `Text`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum ScanToken {
    #[token("{")]
    Open,

    #[token("}")]
    Close,

    // A backslash-escaped special never changes nesting depth
    #[regex(r"\\[{}%\\]", priority = 3)]
    Escaped,

    // `%` to end of line; braces inside a comment do not balance
    #[regex(r"%[^\n]*", priority = 2)]
    Comment,

    // A lone control-sequence backslash (e.g. the `\` of `\begin`)
    #[regex(r"\\", priority = 1)]
    ControlPrefix,

    #[regex(r"[^{}%\\]+")]
    Text,
}

/// Errors from delimiter matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The input ended before balance returned to zero
    Unbalanced { open_offset: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Unbalanced { open_offset } => write!(
                f,
                "unbalanced delimiter: no closing token for the opening at offset {}",
                open_offset
            ),
        }
    }
}

impl std::error::Error for MatchError {}

/// End offsets of a matched environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEnd {
    /// Offset of the matching `\end{...}` token (exclusive end of the body)
    pub body_end: usize,
    /// Offset just past the matching `\end{...}` token
    pub after_end: usize,
}

/// Find the matching `}` for an opening brace.
///
/// `open` must be the offset immediately past a real `{`; locating that brace is the
/// caller's job (normally via the pattern library). Returns the exclusive end offset
/// of the brace group's content, i.e. the offset of the matching `}` itself, so
/// `&text[open..end]` is the group content.
///
/// Pure function over the slice; same input, same result.
pub fn match_braces(text: &str, open: usize) -> Result<usize, MatchError> {
    debug_assert!(open <= text.len(), "offset past end of input");
    debug_assert!(
        text[..open].ends_with('{'),
        "offset must point just past an opening brace"
    );

    let mut depth = 1usize;
    let mut lexer = ScanToken::lexer(&text[open..]);
    while let Some(token) = lexer.next() {
        match token {
            Ok(ScanToken::Open) => depth += 1,
            Ok(ScanToken::Close) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + lexer.span().start);
                }
            }
            // Escaped characters, comments, text runs and lex errors are all inert
            _ => {}
        }
    }
    Err(MatchError::Unbalanced { open_offset: open })
}

// Matches both halves of an environment pair; the name capture is compared against
// the environment being balanced so unrelated environments pass through as text.
static ENV_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(begin|end)\s*\{\s*([A-Za-z]+\*?)\s*\}").unwrap());

/// Find the matching `\end{name}` for an environment opened before `body_start`.
///
/// `body_start` must be the offset just past the `\begin{name}` token. Same-name
/// environments nest; begin/end tokens inside comments are ignored.
pub fn match_environment(text: &str, name: &str, body_start: usize) -> Result<EnvEnd, MatchError> {
    debug_assert!(body_start <= text.len(), "offset past end of input");

    let comments = comment_spans(&text[body_start..]);
    let mut depth = 1usize;
    for caps in ENV_TOKEN.captures_iter(&text[body_start..]) {
        // Group 0 always exists on a match
        let whole = caps.get(0).unwrap();
        if caps.get(2).map(|m| m.as_str()) != Some(name) {
            continue;
        }
        if in_spans(&comments, whole.start()) {
            continue;
        }
        match caps.get(1).map(|m| m.as_str()) {
            Some("begin") => depth += 1,
            Some("end") => {
                depth -= 1;
                if depth == 0 {
                    return Ok(EnvEnd {
                        body_end: body_start + whole.start(),
                        after_end: body_start + whole.end(),
                    });
                }
            }
            _ => {}
        }
    }
    Err(MatchError::Unbalanced {
        open_offset: body_start,
    })
}

/// Spans of `%`-to-end-of-line comments in `text`, in order.
///
/// Escaped percents (`\%`) do not open comments. Offsets are relative to `text`.
pub fn comment_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut lexer = ScanToken::lexer(text);
    while let Some(token) = lexer.next() {
        if let Ok(ScanToken::Comment) = token {
            spans.push(lexer.span());
        }
    }
    spans
}

/// Whether `pos` falls inside any of the (ordered, disjoint) spans.
pub fn in_spans(spans: &[Range<usize>], pos: usize) -> bool {
    spans.iter().any(|s| s.contains(&pos))
}
