//! Shared types for the pseudo-localization engine: spans, transform
//! scopes, errors and the `strings` request/response bodies.

pub mod error;
pub mod request;
pub mod span;

pub use error::{PseudoError, Result};
pub use request::{StringsRequest, StringsResponse};
pub use span::{Span, SpanKind, TransformScope};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_rejoin_in_order() {
        let spans = vec![
            Span::literal("Hi "),
            Span::placeholder("{0}"),
            Span::literal("."),
        ];
        assert_eq!(Span::join(&spans), "Hi {0}.");
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = PseudoError::InvalidInputType {
            found: "number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "text to pseudo-localize must be a string, found number"
        );
        let err = PseudoError::UnknownTransform {
            name: "sparkles".to_string(),
        };
        assert_eq!(err.to_string(), "unknown transform: sparkles");
    }
}
