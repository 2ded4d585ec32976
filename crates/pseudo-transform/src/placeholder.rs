//! Placeholder-aware tokenizer.
//!
//! Recognizes two placeholder syntaxes:
//!
//! - brace placeholders: `{0}`, `{name}`, `{}` (non-greedy up to the next `}`)
//! - percent placeholders: `%s`, `%d`, `%(name)s`, `%%`, `%5.2f`
//!
//! The percent grammar is permissive: `%` followed by anything up to the next
//! conversion character counts, so `"100% sure"` yields the placeholder `% s`.
//! A `%` with no conversion character after it on the same line is plain text.

use std::sync::LazyLock;

use pseudo_model::Span;
use regex::Regex;

/// Regex source for a single placeholder.
///
/// The `(identifier)` group accepts letters, numbers and `_` only; symbols
/// such as `ⓐ` and combining marks end it.
pub const PLACEHOLDER_PATTERN: &str = r"\{.*?\}|%(?:\([\p{L}\p{N}_]+?\))?.*?[acdeEfFgGiorsuxX%]";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern compiles"));

static ANCHORED_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{PLACEHOLDER_PATTERN})")).expect("placeholder pattern compiles")
});

/// Returns true if a placeholder occurs anywhere in `text`.
pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Returns true if `text` begins with a placeholder.
pub fn is_placeholder(text: &str) -> bool {
    ANCHORED_PLACEHOLDER_RE.is_match(text)
}

/// Split `text` into alternating literal and placeholder spans.
///
/// The result always starts and ends with a literal span, either of which may
/// be empty, so `n` placeholders produce `2n + 1` spans. Joining the spans
/// reconstructs `text` exactly.
///
/// # Examples
///
/// ```
/// use pseudo_transform::placeholder::split;
///
/// let spans = split("Hi {0}.");
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].text, "{0}");
/// assert!(spans[1].is_placeholder());
/// ```
pub fn split(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for found in PLACEHOLDER_RE.find_iter(text) {
        spans.push(Span::literal(&text[last..found.start()]));
        spans.push(Span::placeholder(found.as_str()));
        last = found.end();
    }
    spans.push(Span::literal(&text[last..]));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[test]
    fn split_without_placeholders_is_single_literal() {
        let spans = split("no placeholders here");
        assert_eq!(spans, vec![Span::literal("no placeholders here")]);
    }

    #[test]
    fn split_adjacent_placeholders_keeps_empty_literals() {
        let spans = split("{a}{b}");
        assert_eq!(texts(&spans), vec!["", "{a}", "", "{b}", ""]);
        assert!(spans[0].is_literal());
        assert!(spans[3].is_placeholder());
    }

    #[test]
    fn brace_match_is_non_greedy() {
        let spans = split("{one} and {two}");
        assert_eq!(texts(&spans), vec!["", "{one}", " and ", "{two}", ""]);
    }

    #[test]
    fn percent_forms() {
        assert_eq!(texts(&split("%(x)d%%")), vec!["", "%(x)d", "", "%%", ""]);
        assert_eq!(texts(&split("%5.2f kg")), vec!["", "%5.2f", " kg"]);
        assert_eq!(texts(&split("Source %s returned %d rows.")), vec![
            "Source ",
            "%s",
            " returned ",
            "%d",
            " rows."
        ]);
    }

    #[test]
    fn permissive_percent_grammar_is_kept() {
        assert_eq!(texts(&split("100% sure")), vec!["100", "% s", "ure"]);
    }

    #[test]
    fn identifier_group_excludes_symbols_and_marks() {
        assert_eq!(texts(&split("%(ⓐe)z s")), vec!["", "%(ⓐe", ")z s"]);
        assert_eq!(texts(&split("%(e\u{301}x)z s")), vec![
            "",
            "%(e",
            "\u{301}x)z s"
        ]);
        assert_eq!(texts(&split("%(name_1)s")), vec!["", "%(name_1)s", ""]);
    }

    #[test]
    fn lone_percent_is_literal() {
        assert!(!contains_placeholder("50%"));
        assert!(!contains_placeholder("100% 123"));
    }

    #[test]
    fn unclosed_brace_is_literal() {
        assert!(!contains_placeholder("{unclosed"));
        assert_eq!(split("{unclosed"), vec![Span::literal("{unclosed")]);
    }

    #[test]
    fn placeholder_does_not_cross_lines() {
        assert!(!contains_placeholder("{open\nclose}"));
    }

    #[test]
    fn is_placeholder_checks_prefix() {
        assert!(is_placeholder("{0}"));
        assert!(is_placeholder("%(name)s"));
        assert!(is_placeholder("{}"));
        assert!(!is_placeholder("Hi {0}"));
        assert!(!is_placeholder(""));
    }
}
