//! Spans produced by the placeholder tokenizer.
//!
//! A source string is cut into an alternating sequence of literal text and
//! format placeholders. Joining the spans back together in order yields the
//! original string byte for byte.

use serde::{Deserialize, Serialize};

/// Classification of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// Ordinary text; transliterations apply here.
    Literal,
    /// A format placeholder such as `{0}` or `%(name)s`; never altered.
    Placeholder,
}

/// A substring of the source tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Literal,
            text: text.into(),
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Placeholder,
            text: text.into(),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == SpanKind::Literal
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == SpanKind::Placeholder
    }

    /// Number of characters (Unicode scalar values) in the span.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Concatenate spans back into a single string.
    pub fn join(spans: &[Span]) -> String {
        let capacity = spans.iter().map(|span| span.text.len()).sum();
        let mut joined = String::with_capacity(capacity);
        for span in spans {
            joined.push_str(&span.text);
        }
        joined
    }
}

/// Where a transform is allowed to operate.
///
/// The scope is a fixed property of each transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformScope {
    /// Applied to each literal span; placeholders are skipped.
    SpanScoped,
    /// Applied once to the rejoined string, placeholders included.
    WholeString,
}

impl TransformScope {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SpanScoped => "Span",
            Self::WholeString => "Whole string",
        }
    }
}
