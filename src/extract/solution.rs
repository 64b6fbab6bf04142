//! Worked-solution extraction
//!
//! The solution macro's argument is captured verbatim, nested macros and math
//! included, via the delimiter matcher. A block without a solution macro is normal;
//! an unterminated one is a block-scoped failure.

use std::ops::Range;

use crate::extract::delimiter::{comment_spans, in_spans, match_braces, MatchError};
use crate::extract::patterns;

/// A located solution macro
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Argument text, verbatim
    pub content: String,
    /// Body-relative span of the whole macro invocation, closing brace included
    pub span: Range<usize>,
}

/// Locate the solution macro in a block body and capture its argument.
///
/// Returns `Ok(None)` when the block carries no solution macro. Occurrences inside
/// comments are ignored.
pub fn extract_solution(body: &str) -> Result<Option<Solution>, MatchError> {
    let comments = comment_spans(body);
    let located = patterns::SOLUTION_MACRO
        .find_iter(body)
        .find(|m| !in_spans(&comments, m.start()));

    let m = match located {
        Some(m) => m,
        None => return Ok(None),
    };

    // The pattern ends at the opening brace
    let open = m.end();
    let close = match_braces(body, open)?;
    Ok(Some(Solution {
        content: body[open..close].to_string(),
        span: m.start()..close + 1,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_solution_is_none() {
        assert_eq!(extract_solution("stem with no solution"), Ok(None));
    }

    #[test]
    fn test_simple_solution() {
        let sol = extract_solution(r"stem \loigiai{because...} tail")
            .unwrap()
            .unwrap();
        assert_eq!(sol.content, "because...");
        assert_eq!(sol.span, 5..25);
    }

    #[test]
    fn test_nested_latex_is_verbatim() {
        let body = r"stem \loigiai{We have $\frac{1}{2} + \frac{1}{2} = 1$.}";
        let sol = extract_solution(body).unwrap().unwrap();
        assert_eq!(sol.content, r"We have $\frac{1}{2} + \frac{1}{2} = 1$.");
    }

    #[test]
    fn test_unterminated_solution() {
        assert!(matches!(
            extract_solution(r"stem \loigiai{never closes"),
            Err(MatchError::Unbalanced { .. })
        ));
    }

    #[test]
    fn test_commented_out_solution_is_ignored() {
        let body = "stem %\\loigiai{draft}\n\\loigiai{final}";
        let sol = extract_solution(body).unwrap().unwrap();
        assert_eq!(sol.content, "final");
    }
}
