//! Leading block comment extraction and the header verdict.
//!
//! Two-stage approach:
//! 1. A non-greedy regex finds the first `/* ... */` span.
//! 2. The span interior is checked against the marker rules.

use std::sync::LazyLock;

use regex::Regex;

/// First block comment span, shortest match. `(?s)` lets the interior span
/// lines; `.*?` keeps the match non-greedy so the span closes at the first
/// `*/` and text after it never leaks into the interior.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?s)/\*(.*?)\*/") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid block comment regex: {err}"),
    });

/// Outcome of checking a file's leading block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVerdict {
    /// A block comment is present, marker-prefixed, and long enough.
    Pass,
    /// The comment interior does not start with the marker after trimming.
    Malformed,
    /// Fewer marker-prefixed lines than the required minimum.
    TooShort {
        /// Number of marker-prefixed lines actually found.
        marker_lines: usize,
    },
    /// No block comment anywhere in the file.
    NoComment {
        /// Whether the file has non-whitespace content despite the missing
        /// comment. Both sub-cases fail; only the diagnostic differs.
        has_code: bool,
    },
}

/// Check `content` against the header rules.
///
/// Only the first block comment in the file is considered: a malformed first
/// comment is not rescued by a later well-formed one, and a later malformed
/// one cannot fail a file whose first comment passes.
///
/// The marker-prefix check on the trimmed interior is prerequisite to the
/// line count: a comment failing it is `Malformed` even if enough of its
/// lines carry the marker. The count itself includes every interior line
/// that starts with the marker after leading whitespace, the first included.
#[must_use]
pub fn check_header(content: &str, marker: char, min_marker_lines: usize) -> HeaderVerdict {
    let Some(captures) = BLOCK_COMMENT.captures(content) else {
        return HeaderVerdict::NoComment {
            has_code: !content.trim().is_empty(),
        };
    };
    // Group 1 is always present when the pattern matches.
    let interior = captures.get(1).map_or("", |m| m.as_str());

    if !interior.trim().starts_with(marker) {
        return HeaderVerdict::Malformed;
    }

    let marker_lines = interior
        .lines()
        .filter(|line| line.trim_start().starts_with(marker))
        .count();
    if marker_lines < min_marker_lines {
        HeaderVerdict::TooShort { marker_lines }
    } else {
        HeaderVerdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> HeaderVerdict {
        check_header(content, '*', 4)
    }

    #[test]
    fn test_well_formed_header_passes() {
        let content = "/*\n * Line1\n * Line2\n * Line3\n * Line4\n */\nvoid loop(){}";
        assert_eq!(check(content), HeaderVerdict::Pass);
    }

    #[test]
    fn test_first_line_counts_toward_minimum() {
        // No newline before the first marker line.
        let content = "/* * one\n * two\n * three\n * four\n */";
        assert_eq!(check(content), HeaderVerdict::Pass);
    }

    #[test]
    fn test_short_comment_reports_marker_line_count() {
        let content = "/*\n * only one line\n */";
        assert_eq!(check(content), HeaderVerdict::TooShort { marker_lines: 1 });
    }

    #[test]
    fn test_interior_not_starting_with_marker_is_malformed() {
        let content = "/* not starting with star\n * line2\n */";
        assert_eq!(check(content), HeaderVerdict::Malformed);
    }

    #[test]
    fn test_malformed_beats_line_count() {
        // Plenty of marker lines, but the trimmed interior starts with text.
        let content = "/* intro\n * a\n * b\n * c\n * d\n */";
        assert_eq!(check(content), HeaderVerdict::Malformed);
    }

    #[test]
    fn test_only_first_comment_is_considered() {
        // A well-formed second comment does not rescue a malformed first one.
        let content = "/* no\n */\n/*\n * a\n * b\n * c\n * d\n */";
        assert_eq!(check(content), HeaderVerdict::Malformed);

        // Nor does it rescue a short first one.
        let content = "/*\n * a\n */\n/*\n * a\n * b\n * c\n * d\n */";
        assert_eq!(check(content), HeaderVerdict::TooShort { marker_lines: 1 });
    }

    #[test]
    fn test_non_greedy_span_stops_at_first_close() {
        // Greedy matching would swallow everything up to the second `*/`.
        let content = "/*\n * a\n * b\n * c\n * d\n */ code(); /* x */";
        assert_eq!(check(content), HeaderVerdict::Pass);
    }

    #[test]
    fn test_code_without_comment() {
        assert_eq!(
            check("void setup(){}\nvoid loop(){}\n"),
            HeaderVerdict::NoComment { has_code: true }
        );
    }

    #[test]
    fn test_empty_file_has_no_comment() {
        assert_eq!(check(""), HeaderVerdict::NoComment { has_code: false });
        assert_eq!(check("  \n\t\n"), HeaderVerdict::NoComment { has_code: false });
    }

    #[test]
    fn test_unclosed_comment_is_no_comment() {
        assert_eq!(
            check("/*\n * a\n * b\n * c\n * d\n"),
            HeaderVerdict::NoComment { has_code: true }
        );
    }

    #[test]
    fn test_custom_minimum() {
        let content = "/*\n * a\n * b\n */";
        assert_eq!(check_header(content, '*', 2), HeaderVerdict::Pass);
        assert_eq!(
            check_header(content, '*', 3),
            HeaderVerdict::TooShort { marker_lines: 2 }
        );
    }
}
