//! The named transform catalog.
//!
//! Every transform is a pure `&str -> String` function. Its [`TransformScope`]
//! is fixed here and decides how the pipeline runs it when the input contains
//! placeholders.

use std::fmt;
use std::str::FromStr;

use pseudo_model::{PseudoError, TransformScope};
use serde::{Deserialize, Serialize};

use crate::brackets::{angle_brackets, curly_brackets, simple_square_brackets, square_brackets};
use crate::expansion::{expand_vowels, pad_length};
use crate::transliterate::{
    transliterate_circled, transliterate_diacritic, transliterate_fullwidth,
};

/// A transform from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// Latin letters to letters with diacritics.
    TransliterateDiacritic,
    /// Latin letters and digits to circled forms.
    TransliterateCircled,
    /// Latin letters and digits to fullwidth forms.
    TransliterateFullwidth,
    /// Wrap in `《 》`.
    AngleBrackets,
    /// Wrap in `❴ ❵`.
    CurlyBrackets,
    /// Wrap in `⟦ ⟧`.
    SquareBrackets,
    /// Wrap in `[ ]`.
    SimpleSquareBrackets,
    /// Append filler characters up to the expansion target.
    PadLength,
    /// Repeat vowels up to the expansion target.
    ExpandVowels,
}

impl TransformKind {
    /// Every transform, in catalog order.
    pub const ALL: [TransformKind; 9] = [
        Self::TransliterateDiacritic,
        Self::TransliterateCircled,
        Self::TransliterateFullwidth,
        Self::AngleBrackets,
        Self::CurlyBrackets,
        Self::SquareBrackets,
        Self::SimpleSquareBrackets,
        Self::PadLength,
        Self::ExpandVowels,
    ];

    /// Where this transform operates.
    pub fn scope(self) -> TransformScope {
        match self {
            Self::TransliterateDiacritic
            | Self::TransliterateCircled
            | Self::TransliterateFullwidth => TransformScope::SpanScoped,
            Self::AngleBrackets
            | Self::CurlyBrackets
            | Self::SquareBrackets
            | Self::SimpleSquareBrackets
            | Self::PadLength
            | Self::ExpandVowels => TransformScope::WholeString,
        }
    }

    pub fn is_transliteration(self) -> bool {
        self.scope() == TransformScope::SpanScoped
    }

    /// Run the transform on `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::TransliterateDiacritic => transliterate_diacritic(text),
            Self::TransliterateCircled => transliterate_circled(text),
            Self::TransliterateFullwidth => transliterate_fullwidth(text),
            Self::AngleBrackets => angle_brackets(text),
            Self::CurlyBrackets => curly_brackets(text),
            Self::SquareBrackets => square_brackets(text),
            Self::SimpleSquareBrackets => simple_square_brackets(text),
            Self::PadLength => pad_length(text),
            Self::ExpandVowels => expand_vowels(text),
        }
    }

    /// Stable identifier used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::TransliterateDiacritic => "transliterate_diacritic",
            Self::TransliterateCircled => "transliterate_circled",
            Self::TransliterateFullwidth => "transliterate_fullwidth",
            Self::AngleBrackets => "angle_brackets",
            Self::CurlyBrackets => "curly_brackets",
            Self::SquareBrackets => "square_brackets",
            Self::SimpleSquareBrackets => "simple_square_brackets",
            Self::PadLength => "pad_length",
            Self::ExpandVowels => "expand_vowels",
        }
    }

    /// One-line human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::TransliterateDiacritic => "Latin letters with diacritics",
            Self::TransliterateCircled => "Circled letters and digits",
            Self::TransliterateFullwidth => "Fullwidth letters and digits",
            Self::AngleBrackets => "Wrap in 《 》",
            Self::CurlyBrackets => "Wrap in ❴ ❵",
            Self::SquareBrackets => "Wrap in ⟦ ⟧",
            Self::SimpleSquareBrackets => "Wrap in [ ]",
            Self::PadLength => "Pad to the UI expansion target",
            Self::ExpandVowels => "Repeat vowels to the UI expansion target",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = PseudoError;

    /// Parse a transform name; `-` and `_` are interchangeable and case is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| PseudoError::UnknownTransform {
                name: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transliterations_are_span_scoped() {
        let span_scoped: Vec<_> = TransformKind::ALL
            .into_iter()
            .filter(|kind| kind.is_transliteration())
            .collect();
        assert_eq!(span_scoped, vec![
            TransformKind::TransliterateDiacritic,
            TransformKind::TransliterateCircled,
            TransformKind::TransliterateFullwidth,
        ]);
        assert_eq!(TransformKind::ExpandVowels.scope(), TransformScope::WholeString);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.name().parse::<TransformKind>(), Ok(kind));
        }
    }

    #[test]
    fn from_str_accepts_dashes_and_case() {
        assert_eq!("Pad-Length".parse::<TransformKind>(), Ok(TransformKind::PadLength));
        assert_eq!(" square_brackets ".parse::<TransformKind>(), Ok(TransformKind::SquareBrackets));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "sparkles".parse::<TransformKind>().unwrap_err();
        assert_eq!(err, PseudoError::UnknownTransform {
            name: "sparkles".to_string()
        });
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&TransformKind::SimpleSquareBrackets).unwrap();
        assert_eq!(json, "\"simple_square_brackets\"");
        let kind: TransformKind = serde_json::from_str("\"expand_vowels\"").unwrap();
        assert_eq!(kind, TransformKind::ExpandVowels);
    }

    #[test]
    fn apply_dispatches() {
        assert_eq!(TransformKind::SquareBrackets.apply("Hello"), "⟦Hello⟧");
        assert_eq!(TransformKind::TransliterateDiacritic.apply("Hello"), "Ȟêĺĺø");
    }
}
