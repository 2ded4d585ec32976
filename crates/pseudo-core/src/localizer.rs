//! Pipeline executor.
//!
//! A [`PseudoLocalizer`] owns an ordered list of transforms and applies it to
//! strings. When the input contains placeholders the run has two phases:
//!
//! 1. every span-scoped transform (the transliterations), in list order, on
//!    each literal span while placeholder spans are left alone;
//! 2. the spans are rejoined and every whole-string transform (brackets,
//!    padding, vowel expansion) runs, in list order, on the result.
//!
//! Without placeholders every transform simply runs in list order on the
//! whole string.
//!
//! # Example
//!
//! ```
//! use pseudo_core::PseudoLocalizer;
//! use pseudo_transform::TransformKind;
//!
//! let localizer = PseudoLocalizer::with_transforms([TransformKind::SquareBrackets]);
//! assert_eq!(localizer.pseudolocalize("Hi {0}."), "⟦Hi {0}.⟧");
//! ```

use pseudo_model::request::value_type_name;
use pseudo_model::{PseudoError, Result, Span, StringsRequest, StringsResponse};
use pseudo_transform::{TransformKind, contains_placeholder, split};
use serde_json::Value;

/// Transforms applied by [`PseudoLocalizer::new`].
pub const DEFAULT_TRANSFORMS: [TransformKind; 3] = [
    TransformKind::TransliterateDiacritic,
    TransformKind::PadLength,
    TransformKind::SquareBrackets,
];

/// Applies a configurable, ordered transform pipeline to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoLocalizer {
    transforms: Vec<TransformKind>,
}

impl Default for PseudoLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PseudoLocalizer {
    /// Create a localizer with the default pipeline
    /// (diacritics, length padding, square brackets).
    pub fn new() -> Self {
        Self::with_transforms(DEFAULT_TRANSFORMS)
    }

    /// Create a localizer with an explicit pipeline, which may be empty.
    pub fn with_transforms(transforms: impl IntoIterator<Item = TransformKind>) -> Self {
        Self {
            transforms: transforms.into_iter().collect(),
        }
    }

    /// The configured pipeline, in execution order.
    pub fn transforms(&self) -> &[TransformKind] {
        &self.transforms
    }

    /// Replace the whole pipeline.
    pub fn set_transforms(&mut self, transforms: impl IntoIterator<Item = TransformKind>) {
        self.transforms = transforms.into_iter().collect();
    }

    /// Append a transform to the end of the pipeline.
    pub fn push(&mut self, transform: TransformKind) {
        self.transforms.push(transform);
    }

    /// Pseudo-localize `text`.
    ///
    /// Empty input returns an empty string and an empty pipeline returns the
    /// input unchanged.
    pub fn pseudolocalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if self.transforms.is_empty() {
            return text.to_string();
        }
        if !contains_placeholder(text) {
            return self
                .transforms
                .iter()
                .fold(text.to_string(), |current, transform| {
                    tracing::trace!(transform = %transform, "applying transform");
                    transform.apply(&current)
                });
        }

        let mut spans = split(text);
        for transform in self.transforms.iter().filter(|t| t.is_transliteration()) {
            tracing::trace!(transform = %transform, spans = spans.len(), "applying per span");
            for span in spans.iter_mut().filter(|span| span.is_literal()) {
                span.text = transform.apply(&span.text);
            }
        }
        let joined = Span::join(&spans);
        self.transforms
            .iter()
            .filter(|t| !t.is_transliteration())
            .fold(joined, |current, transform| {
                tracing::trace!(transform = %transform, "applying to whole string");
                transform.apply(&current)
            })
    }

    /// Pseudo-localize optional text; `None` yields an empty string.
    pub fn pseudolocalize_opt(&self, text: Option<&str>) -> String {
        text.map(|text| self.pseudolocalize(text))
            .unwrap_or_default()
    }

    /// Pseudo-localize a dynamically typed value.
    ///
    /// `null` yields an empty string; any non-string value is rejected with
    /// [`PseudoError::InvalidInputType`].
    pub fn pseudolocalize_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(text) => Ok(self.pseudolocalize(text)),
            other => Err(PseudoError::InvalidInputType {
                found: value_type_name(other).to_string(),
            }),
        }
    }

    /// Answer a `strings` request: every value is pseudo-localized under its key.
    ///
    /// A single non-string entry fails the whole request.
    pub fn pseudolocalize_strings(&self, request: &StringsRequest) -> Result<StringsResponse> {
        let mut response = StringsResponse::default();
        for (key, value) in &request.strings {
            let localized =
                self.pseudolocalize_value(value)
                    .map_err(|_| PseudoError::InvalidStringsEntry {
                        key: key.clone(),
                        found: value_type_name(value).to_string(),
                    })?;
            response.strings.insert(key.clone(), localized);
        }
        tracing::debug!(count = response.strings.len(), "pseudo-localized strings request");
        Ok(response)
    }
}
